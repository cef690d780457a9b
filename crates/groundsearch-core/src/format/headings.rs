// Heading and bullet heuristics

use regex::Regex;
use std::sync::OnceLock;

static SECTION_REGEX: OnceLock<Regex> = OnceLock::new();
static SUBSECTION_REGEX: OnceLock<Regex> = OnceLock::new();
static BULLET_REGEX: OnceLock<Regex> = OnceLock::new();

fn get_section_regex() -> &'static Regex {
    SECTION_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^([A-Za-z][A-Za-z\s]+):(\s*)").expect("Section regex is valid")
    })
}

fn get_subsection_regex() -> &'static Regex {
    SUBSECTION_REGEX.get_or_init(|| {
        Regex::new(r"(?m)^([A-Za-z][A-Za-z\s]+):").expect("Subsection regex is valid")
    })
}

fn get_bullet_regex() -> &'static Regex {
    BULLET_REGEX.get_or_init(|| Regex::new(r"(?m)^[•●○]\s*").expect("Bullet regex is valid"))
}

/// `Label:` at the start of a line becomes `## Label`, keeping what follows.
pub(super) fn promote_sections(text: &str) -> String {
    get_section_regex().replace_all(text, "## ${1}${2}").into_owned()
}

/// Remaining `Label:` at a line start becomes `### Label` unless the colon
/// is followed by a digit (times, ratios, verse numbers).
pub(super) fn promote_subsections(text: &str) -> String {
    let mut output = String::with_capacity(text.len());
    let mut last = 0;

    for caps in get_subsection_regex().captures_iter(text) {
        let (Some(whole), Some(label)) = (caps.get(0), caps.get(1)) else {
            continue;
        };
        if text[whole.end()..].starts_with(|c: char| c.is_ascii_digit()) {
            continue;
        }

        output.push_str(&text[last..whole.start()]);
        output.push_str("### ");
        output.push_str(label.as_str());
        last = whole.end();
    }

    output.push_str(&text[last..]);
    output
}

pub(super) fn normalize_bullets(text: &str) -> String {
    get_bullet_regex().replace_all(text, "* ").into_owned()
}
