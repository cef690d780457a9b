//! Markdown/HTML formatting of annotated model text.
//!
//! The pipeline is a fixed sequence of textual passes; each pass sees the
//! previous one's output:
//!
//! 1. normalize line endings
//! 2. `Label:` at line start → `## Label`
//! 3. remaining `Label:` not followed by a digit → `### Label`
//! 4. `•`/`●`/`○` bullets → `* `
//! 5. fenced code → `<pre><code class="language-X">`
//! 6. inline code → `<code>`
//! 7. `[n]` → reference anchor + tooltip (out-of-range markers stay literal)
//! 8. wrap plain paragraphs in `<p>`
//! 9. Markdown → HTML (GFM, soft breaks as `<br>`)
//! 10. prepend the citation stylesheet
//!
//! Formatting is infallible. Model output and source metadata are inserted
//! as raw HTML without escaping.

mod code;
mod headings;
mod markdown;
mod paragraphs;
mod references;
mod stylesheet;


use groundsearch_types::{FormatConfig, Source};

pub use stylesheet::CITATION_STYLESHEET;

/// Formats annotated text into the HTML summary returned to clients.
#[derive(Debug, Clone, Copy)]
pub struct Formatter {
    heading_heuristics: bool,
}

impl Default for Formatter {
    fn default() -> Self {
        Self::new(FormatConfig::default())
    }
}

impl Formatter {
    pub fn new(config: FormatConfig) -> Self {
        Self { heading_heuristics: config.heading_heuristics }
    }

    pub fn format(&self, text: &str, sources: &[Source]) -> String {
        let mut processed = text.replace("\r\n", "\n");

        if self.heading_heuristics {
            processed = headings::promote_sections(&processed);
            processed = headings::promote_subsections(&processed);
        }

        processed = headings::normalize_bullets(&processed);
        processed = code::render_fenced_blocks(&processed);
        processed = code::render_inline_code(&processed);
        processed = references::render_references(&processed, sources);

        let assembled = paragraphs::wrap_paragraphs(&processed);
        let html = markdown::to_html(&assembled);

        format!("{}\n{}", CITATION_STYLESHEET, html)
    }
}

/// Format with default options.
pub fn format(text: &str, sources: &[Source]) -> String {
    Formatter::default().format(text, sources)
}
