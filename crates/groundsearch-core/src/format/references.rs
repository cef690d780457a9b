use regex::{Captures, Regex};
use std::sync::OnceLock;

use groundsearch_types::Source;

/// Marker class that also tells the paragraph pass not to wrap.
pub(super) const REFERENCE_CONTAINER_ATTR: &str = r#"class="reference-container""#;

static REFERENCE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_reference_regex() -> &'static Regex {
    REFERENCE_REGEX.get_or_init(|| Regex::new(r"\[(\d+)\]").expect("Reference regex is valid"))
}

/// Replace every `[n]` naming an existing source with an anchor and tooltip.
pub(super) fn render_references(text: &str, sources: &[Source]) -> String {
    get_reference_regex()
        .replace_all(text, |caps: &Captures| {
            let marker = &caps[0];
            let source = caps[1]
                .parse::<usize>()
                .ok()
                .and_then(|n| n.checked_sub(1))
                .and_then(|i| sources.get(i));

            match source {
                Some(source) => reference_html(&caps[1], source),
                None => marker.to_string(),
            }
        })
        .into_owned()
}

fn reference_html(num: &str, source: &Source) -> String {
    format!(
        r#"<span {container}>
          <a href="{url}"
             target="_blank"
             rel="noopener noreferrer"
             class="reference-link">[{num}]</a>
          <div class="reference-tooltip">
            <div class="reference-title">{title}</div>
            <div class="reference-snippet">{snippet}</div>
            <div class="reference-url">{url}</div>
          </div>
        </span>"#,
        container = REFERENCE_CONTAINER_ATTR,
        url = source.url,
        num = num,
        title = source.title,
        snippet = source.snippet,
    )
}
