use std::collections::{BTreeSet, HashMap};

use groundsearch_types::protocol::{GroundingChunk, GroundingSupport};
use groundsearch_types::Source;

/// Sources discovered for one response, keyed by URL.
#[derive(Debug, Default)]
pub struct SourceIndex {
    sources: Vec<Source>,
    by_url: HashMap<String, usize>,
}

impl SourceIndex {
    /// Walk `chunks` in order and register one source per distinct URL.
    ///
    /// A chunk needs both a URI and a title to be registered. The snippet
    /// is computed once, from the supports citing the first chunk seen for
    /// that URL.
    pub fn discover(chunks: &[GroundingChunk], supports: &[GroundingSupport]) -> Self {
        let mut index = Self::default();

        for (position, chunk) in chunks.iter().enumerate() {
            let (Some(url), Some(title)) = (chunk.uri(), chunk.title()) else {
                continue;
            };
            if index.by_url.contains_key(url) {
                continue;
            }

            let snippet = supports
                .iter()
                .filter(|support| support.cites(position))
                .filter_map(GroundingSupport::text)
                .collect::<Vec<_>>()
                .join(" ");

            let source = Source {
                title: title.to_string(),
                url: url.to_string(),
                snippet,
                index: index.sources.len() + 1,
            };
            tracing::debug!("[Citation] Added source [{}] {} ({})", source.index, title, url);

            index.by_url.insert(url.to_string(), source.index);
            index.sources.push(source);
        }

        index
    }

    pub fn len(&self) -> usize {
        self.sources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sources.is_empty()
    }

    /// Source index for chunk `chunk_index`, resolved through the chunk's URL.
    pub fn index_for_chunk(&self, chunks: &[GroundingChunk], chunk_index: i64) -> Option<usize> {
        let position = usize::try_from(chunk_index).ok()?;
        let url = chunks.get(position)?.uri()?;
        self.by_url.get(url).copied()
    }

    /// Concatenated `[i]` markers for a support, ascending and deduplicated.
    ///
    /// `None` when none of the support's chunks resolve to a source.
    pub fn reference_text(
        &self,
        chunks: &[GroundingChunk],
        support: &GroundingSupport,
    ) -> Option<String> {
        let indices: BTreeSet<usize> = support
            .chunk_indices()
            .iter()
            .filter_map(|&i| self.index_for_chunk(chunks, i))
            .collect();

        if indices.is_empty() {
            return None;
        }

        Some(indices.iter().map(|i| format!("[{}]", i)).collect())
    }

    pub fn into_sources(self) -> Vec<Source> {
        self.sources
    }
}
