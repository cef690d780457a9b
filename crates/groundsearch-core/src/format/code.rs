use regex::{Captures, Regex};
use std::sync::OnceLock;

static FENCED_REGEX: OnceLock<Regex> = OnceLock::new();
static INLINE_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_fenced_regex() -> &'static Regex {
    FENCED_REGEX.get_or_init(|| {
        Regex::new(r"(?s)```([A-Za-z0-9_]+)?\n(.+?)```").expect("Fenced code regex is valid")
    })
}

fn get_inline_regex() -> &'static Regex {
    INLINE_REGEX.get_or_init(|| Regex::new(r"`([^`]+)`").expect("Inline code regex is valid"))
}

/// Fenced blocks become `<pre><code>` with a `language-*` class, `text` when untagged.
pub(super) fn render_fenced_blocks(text: &str) -> String {
    get_fenced_regex()
        .replace_all(text, |caps: &Captures| {
            let lang = caps.get(1).map_or("text", |m| m.as_str());
            let code = caps.get(2).map_or("", |m| m.as_str());
            format!(r#"<pre><code class="language-{}">{}</code></pre>"#, lang, code)
        })
        .into_owned()
}

pub(super) fn render_inline_code(text: &str) -> String {
    get_inline_regex().replace_all(text, "<code>${1}</code>").into_owned()
}
