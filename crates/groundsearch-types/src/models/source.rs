use serde::{Deserialize, Serialize};

/// A deduplicated web citation for one model response.
///
/// `index` is 1-based in discovery order and only meaningful within the
/// response that produced it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Source {
    pub title: String,
    pub url: String,
    /// Grounded segment texts citing this source, joined with a space.
    pub snippet: String,
    pub index: usize,
}
