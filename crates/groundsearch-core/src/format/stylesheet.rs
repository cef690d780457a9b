/// Inline stylesheet prepended to every summary: reference badge, hover
/// tooltip, narrow-screen repositioning and dark-mode palette.
pub const CITATION_STYLESHEET: &str = r#"<style>
  .reference-container {
    display: inline-flex;
    position: relative;
    font-size: 0.85em;
    margin: 0 2px;
    vertical-align: super;
    z-index: 10;
  }
  .reference-link {
    color: #0366d6;
    text-decoration: none;
    padding: 2px 6px;
    border-radius: 4px;
    background: rgba(3, 102, 214, 0.08);
    transition: all 0.2s ease;
    font-weight: 500;
    white-space: nowrap;
  }
  .reference-link:hover {
    background: rgba(3, 102, 214, 0.15);
  }
  .reference-tooltip {
    visibility: hidden;
    position: absolute;
    left: 50%;
    bottom: 100%;
    transform: translateX(-50%) translateY(-8px);
    background: #ffffff;
    border: 1px solid #e1e4e8;
    border-radius: 8px;
    padding: 16px;
    width: 320px;
    height: fit-content;
    box-shadow: 0 4px 16px rgba(0, 0, 0, 0.1);
    z-index: 1000;
    margin-bottom: 8px;
    opacity: 0;
    transition: all 0.2s ease;
    pointer-events: none;
  }
  .reference-container:hover .reference-tooltip {
    visibility: visible;
    opacity: 1;
    transform: translateX(-50%) translateY(0);
    pointer-events: auto;
  }
  .reference-title {
    font-weight: 600;
    margin-bottom: 10px;
    font-size: 14px;
    color: #24292e;
    line-height: 1.4;
  }
  .reference-snippet {
    font-size: 13px;
    color: #586069;
    margin-bottom: 10px;
    line-height: 1.5;
    font-family: -apple-system, BlinkMacSystemFont, "Segoe UI", Helvetica, Arial, sans-serif;
  }
  .reference-url {
    font-size: 12px;
    color: #0366d6;
    word-break: break-all;
    padding-top: 8px;
    border-top: 1px solid #eaecef;
  }
  .reference-tooltip::before,
  .reference-tooltip::after {
    content: '';
    position: absolute;
    left: 50%;
    bottom: -8px;
    transform: translateX(-50%);
    border-left: 8px solid transparent;
    border-right: 8px solid transparent;
    pointer-events: none;
  }
  .reference-tooltip::before {
    border-top: 8px solid #e1e4e8;
  }
  .reference-tooltip::after {
    border-top: 7px solid #ffffff;
    bottom: -7px;
  }
  @media (max-width: 640px) {
    .reference-tooltip {
      width: 280px;
      left: auto;
      right: 0;
      transform: translateY(-8px);
    }
    .reference-container:hover .reference-tooltip {
      transform: translateY(0);
    }
    .reference-tooltip::before,
    .reference-tooltip::after {
      left: auto;
      right: 16px;
    }
  }
  @media (prefers-color-scheme: dark) {
    .reference-link {
      color: #58a6ff;
      background: rgba(88, 166, 255, 0.1);
    }
    .reference-link:hover {
      background: rgba(88, 166, 255, 0.2);
    }
    .reference-tooltip {
      background: #0d1117;
      border-color: #30363d;
    }
    .reference-title {
      color: #c9d1d9;
    }
    .reference-snippet {
      color: #8b949e;
    }
    .reference-url {
      color: #58a6ff;
      border-top-color: #30363d;
    }
    .reference-tooltip::before {
      border-top-color: #30363d;
    }
    .reference-tooltip::after {
      border-top-color: #0d1117;
    }
  }
</style>"#;
