/// Appended to every query so the model emits bracketed numeric citations.
pub const CITATION_INSTRUCTION: &str =
    "\n\nPlease include numbered references to your sources in square brackets [1], [2], etc. \
     at the end of relevant statements.";

pub fn build_prompt(query: &str) -> String {
    format!("{}{}", query, CITATION_INSTRUCTION)
}
