use groundsearch_types::protocol::{
    GroundingChunk, GroundingMetadata, GroundingSupport, TextSegment, WebSource,
};
use groundsearch_types::{CitationStrategy, Source};

use super::{resolve, resolve_metadata, resolve_with};

fn source(url: &str, title: &str, snippet: &str, index: usize) -> Source {
    Source {
        title: title.to_string(),
        url: url.to_string(),
        snippet: snippet.to_string(),
        index,
    }
}

fn support_at(text: &str, start: i64, end: i64, chunks: &[i64]) -> GroundingSupport {
    GroundingSupport {
        segment: Some(TextSegment {
            start_index: Some(start),
            end_index: Some(end),
            text: Some(text.to_string()),
        }),
        grounding_chunk_indices: Some(chunks.to_vec()),
        confidence_scores: Some(vec![0.9; chunks.len()]),
    }
}

fn untitled(uri: &str) -> GroundingChunk {
    GroundingChunk { web: Some(WebSource { uri: Some(uri.to_string()), title: None }) }
}

#[test]
fn test_single_source_end_to_end() {
    let chunks = vec![GroundingChunk::web("https://a.com", "A")];
    let supports = vec![GroundingSupport::new("Cats are mammals.", &[0])];

    let resolution = resolve("Cats are mammals.", &chunks, &supports);

    assert_eq!(resolution.annotated_text, "Cats are mammals. [1]");
    assert_eq!(
        resolution.sources,
        vec![source("https://a.com", "A", "Cats are mammals.", 1)]
    );
}

#[test]
fn test_duplicate_urls_share_one_source() {
    let chunks = vec![
        GroundingChunk::web("https://a.com", "A"),
        GroundingChunk::web("https://a.com", "A (mirror)"),
        GroundingChunk::web("https://b.com", "B"),
    ];
    let supports = vec![
        GroundingSupport::new("First claim.", &[1]),
        GroundingSupport::new("Second claim.", &[0, 1, 2]),
    ];

    let resolution = resolve("First claim. Second claim.", &chunks, &supports);

    assert_eq!(resolution.sources.len(), 2);
    assert_eq!(resolution.sources[0].url, "https://a.com");
    assert_eq!(resolution.sources[0].title, "A");
    assert_eq!(resolution.sources[1].url, "https://b.com");
    assert_eq!(resolution.sources[1].index, 2);
    assert_eq!(resolution.annotated_text, "First claim. [1] Second claim. [1][2]");
}

#[test]
fn test_snippet_only_from_first_seen_chunk() {
    let chunks = vec![
        GroundingChunk::web("https://a.com", "A"),
        GroundingChunk::web("https://a.com", "A again"),
    ];
    let supports = vec![
        GroundingSupport::new("Alpha.", &[0]),
        GroundingSupport::new("Beta.", &[1]),
        GroundingSupport::new("Gamma.", &[0]),
    ];

    let resolution = resolve("Alpha. Beta. Gamma.", &chunks, &supports);

    assert_eq!(resolution.sources.len(), 1);
    assert_eq!(resolution.sources[0].snippet, "Alpha. Gamma.");
}

#[test]
fn test_indices_are_contiguous_in_discovery_order() {
    let chunks = vec![
        GroundingChunk::web("https://c.com", "C"),
        GroundingChunk::default(),
        GroundingChunk::web("https://a.com", "A"),
        GroundingChunk::web("https://c.com", "C"),
        GroundingChunk::web("https://b.com", "B"),
    ];

    let resolution = resolve("text", &chunks, &[]);

    let urls: Vec<_> = resolution.sources.iter().map(|s| s.url.as_str()).collect();
    assert_eq!(urls, vec!["https://c.com", "https://a.com", "https://b.com"]);
    for (i, source) in resolution.sources.iter().enumerate() {
        assert_eq!(source.index, i + 1);
    }
}

#[test]
fn test_chunks_without_uri_or_title_are_skipped() {
    let chunks = vec![
        untitled("https://a.com"),
        GroundingChunk { web: Some(WebSource { uri: None, title: Some("No URL".to_string()) }) },
        GroundingChunk { web: None },
    ];
    let supports = vec![GroundingSupport::new("Claim.", &[0, 1, 2])];

    let resolution = resolve("Claim.", &chunks, &supports);

    assert!(resolution.sources.is_empty());
    assert_eq!(resolution.annotated_text, "Claim.");
}

#[test]
fn test_titleless_chunk_resolves_through_known_url() {
    let chunks = vec![
        GroundingChunk::web("https://a.com", "A"),
        untitled("https://a.com"),
    ];
    let supports = vec![GroundingSupport::new("Claim.", &[1])];

    let resolution = resolve("Claim.", &chunks, &supports);

    assert_eq!(resolution.annotated_text, "Claim. [1]");
}

#[test]
fn test_no_metadata_is_a_noop() {
    let raw = "Nothing grounded here [3].";

    let resolution = resolve_metadata(raw, None, CitationStrategy::Substring);
    assert_eq!(resolution.annotated_text, raw);
    assert!(resolution.sources.is_empty());

    let empty = GroundingMetadata::default();
    let resolution = resolve_metadata(raw, Some(&empty), CitationStrategy::Offsets);
    assert_eq!(resolution.annotated_text, raw);
    assert!(resolution.sources.is_empty());
}

#[test]
fn test_segment_with_marker_is_untouched() {
    let chunks = vec![GroundingChunk::web("https://a.com", "A")];
    let supports = vec![
        GroundingSupport::new("Dogs bark [2].", &[0]),
        GroundingSupport::new("Birds fly [citation]", &[0]),
    ];
    let raw = "Dogs bark [2]. Birds fly [citation]";

    let resolution = resolve(raw, &chunks, &supports);

    assert_eq!(resolution.annotated_text, raw);
    // Snippets still include the segments.
    assert_eq!(resolution.sources[0].snippet, "Dogs bark [2]. Birds fly [citation]");
}

#[test]
fn test_missing_segment_is_dropped_silently() {
    let chunks = vec![GroundingChunk::web("https://a.com", "A")];
    let supports = vec![
        GroundingSupport::new("Not in the text.", &[0]),
        GroundingSupport::new("Present.", &[0]),
    ];

    let resolution = resolve("Present.", &chunks, &supports);

    assert_eq!(resolution.annotated_text, "Present. [1]");
}

#[test]
fn test_only_first_occurrence_is_annotated() {
    let chunks = vec![GroundingChunk::web("https://a.com", "A")];
    let supports = vec![GroundingSupport::new("Yes.", &[0])];

    let resolution = resolve("Yes. Yes.", &chunks, &supports);

    assert_eq!(resolution.annotated_text, "Yes. [1] Yes.");
}

#[test]
fn test_insertion_follows_support_order() {
    let chunks = vec![
        GroundingChunk::web("https://a.com", "A"),
        GroundingChunk::web("https://b.com", "B"),
    ];
    // Second support's segment contains the first one's text, so the earlier
    // insertion breaks the later match.
    let supports = vec![
        GroundingSupport::new("Rust is fast", &[0]),
        GroundingSupport::new("Rust is fast and safe.", &[1]),
    ];

    let resolution = resolve("Rust is fast and safe.", &chunks, &supports);

    assert_eq!(resolution.annotated_text, "Rust is fast [1] and safe.");
}

#[test]
fn test_out_of_range_and_negative_chunk_indices_ignored() {
    let chunks = vec![GroundingChunk::web("https://a.com", "A")];
    let supports = vec![
        GroundingSupport::new("Claim one.", &[-1, 7]),
        GroundingSupport::new("Claim two.", &[9, 0]),
    ];

    let resolution = resolve("Claim one. Claim two.", &chunks, &supports);

    assert_eq!(resolution.annotated_text, "Claim one. Claim two. [1]");
}

#[test]
fn test_support_without_segment_is_ignored() {
    let chunks = vec![GroundingChunk::web("https://a.com", "A")];
    let supports = vec![GroundingSupport {
        segment: None,
        grounding_chunk_indices: Some(vec![0]),
        confidence_scores: None,
    }];

    let resolution = resolve("Claim.", &chunks, &supports);

    assert_eq!(resolution.annotated_text, "Claim.");
    assert_eq!(resolution.sources[0].snippet, "");
}

#[test]
fn test_empty_segment_text_inserts_nothing() {
    let chunks = vec![GroundingChunk::web("https://a.com", "A")];
    let supports = vec![GroundingSupport::new("", &[0])];

    let resolution = resolve("Claim.", &chunks, &supports);

    assert_eq!(resolution.annotated_text, "Claim.");
}

#[test]
fn test_offsets_use_trusted_bounds() {
    let raw = "Yes. Yes.";
    let chunks = vec![GroundingChunk::web("https://a.com", "A")];
    // Bounds point at the second "Yes.", which substring matching would miss.
    let supports = vec![support_at("Yes.", 5, 9, &[0])];

    let offsets = resolve_with(raw, &chunks, &supports, CitationStrategy::Offsets);
    let substring = resolve_with(raw, &chunks, &supports, CitationStrategy::Substring);

    assert_eq!(offsets.annotated_text, "Yes. Yes. [1]");
    assert_eq!(substring.annotated_text, "Yes. [1] Yes.");
}

#[test]
fn test_offsets_fall_back_to_search_on_bad_bounds() {
    let raw = "Héllo world. Second.";
    let chunks = vec![
        GroundingChunk::web("https://a.com", "A"),
        GroundingChunk::web("https://b.com", "B"),
    ];
    let supports = vec![
        // Index 2 splits the two-byte 'é'.
        support_at("Héllo world.", 2, 40, &[0]),
        support_at("Second.", 14, 21, &[1]),
    ];

    let resolution = resolve_with(raw, &chunks, &supports, CitationStrategy::Offsets);

    assert_eq!(resolution.annotated_text, "Héllo world. [1] Second. [2]");
}

#[test]
fn test_offsets_are_not_disturbed_by_overlapping_segments() {
    let chunks = vec![
        GroundingChunk::web("https://a.com", "A"),
        GroundingChunk::web("https://b.com", "B"),
    ];
    let supports = vec![
        support_at("Rust is fast", 0, 12, &[0]),
        support_at("Rust is fast and safe.", 0, 22, &[1]),
    ];

    let resolution = resolve_with(
        "Rust is fast and safe.",
        &chunks,
        &supports,
        CitationStrategy::Offsets,
    );

    assert_eq!(resolution.annotated_text, "Rust is fast [1] and safe. [2]");
}

#[test]
fn test_malformed_list_elements_do_not_drop_valid_citations() {
    let metadata: GroundingMetadata = serde_json::from_str(
        r#"{
            "groundingChunks": [{"web": {"uri": "https://a.com", "title": "A"}}, null],
            "groundingSupports": [
                {"segment": {"text": "Cats."}, "groundingChunkIndices": [0, null]}
            ]
        }"#,
    )
    .expect("metadata");

    let resolution = resolve_metadata("Cats.", Some(&metadata), CitationStrategy::Substring);

    assert_eq!(resolution.annotated_text, "Cats. [1]");
    assert_eq!(resolution.sources, vec![source("https://a.com", "A", "Cats.", 1)]);
}
