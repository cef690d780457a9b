//! Citation resolution.
//!
//! Turns a grounded model response (text plus grounding chunks and
//! supports) into a deduplicated, 1-based source list and text carrying
//! `[n]` reference markers after each supported segment.
//!
//! Resolution never fails: missing or malformed metadata degrades to
//! "no sources" and the text passes through unchanged.

mod markers;
mod sources;

#[cfg(test)]
mod tests;

use groundsearch_types::protocol::{GroundingChunk, GroundingMetadata, GroundingSupport};
use groundsearch_types::{CitationStrategy, Source};

pub use sources::SourceIndex;

/// Output of [`resolve`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub annotated_text: String,
    /// Sorted by `index`, contiguous from 1.
    pub sources: Vec<Source>,
}

impl Resolution {
    fn passthrough(raw_text: &str) -> Self {
        Self { annotated_text: raw_text.to_string(), sources: Vec::new() }
    }
}

/// Resolve citations with the default substring strategy.
pub fn resolve(
    raw_text: &str,
    chunks: &[GroundingChunk],
    supports: &[GroundingSupport],
) -> Resolution {
    resolve_with(raw_text, chunks, supports, CitationStrategy::Substring)
}

/// Resolve citations with an explicit marker placement strategy.
pub fn resolve_with(
    raw_text: &str,
    chunks: &[GroundingChunk],
    supports: &[GroundingSupport],
    strategy: CitationStrategy,
) -> Resolution {
    tracing::debug!(
        "[Citation] Processing {} chunks, {} supports",
        chunks.len(),
        supports.len()
    );

    let index = SourceIndex::discover(chunks, supports);

    let annotated_text = match strategy {
        CitationStrategy::Substring => {
            markers::insert_by_substring(raw_text, chunks, supports, &index)
        }
        CitationStrategy::Offsets => markers::insert_by_offsets(raw_text, chunks, supports, &index),
    };

    let mut sources = index.into_sources();
    sources.sort_by_key(|s| s.index);

    Resolution { annotated_text, sources }
}

/// Resolve citations from optional grounding metadata.
///
/// Absent metadata returns the text unchanged with no sources.
pub fn resolve_metadata(
    raw_text: &str,
    metadata: Option<&GroundingMetadata>,
    strategy: CitationStrategy,
) -> Resolution {
    match metadata {
        Some(metadata) => {
            resolve_with(raw_text, metadata.chunks(), metadata.supports(), strategy)
        }
        None => Resolution::passthrough(raw_text),
    }
}
