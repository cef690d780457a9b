use super::references::REFERENCE_CONTAINER_ATTR;

/// Wrap blank-line separated paragraphs in `<p>` unless they already start
/// a heading, list or HTML block, or carry a reference tooltip.
pub(super) fn wrap_paragraphs(text: &str) -> String {
    text.split("\n\n")
        .filter(|p| !p.is_empty())
        .map(|p| {
            if p.starts_with(['#', '*', '-', '<']) || p.contains(REFERENCE_CONTAINER_ATTR) {
                p.to_string()
            } else {
                format!("<p>{}</p>", p)
            }
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}
