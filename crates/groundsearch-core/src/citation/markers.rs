// Reference marker insertion

use groundsearch_types::protocol::{GroundingChunk, GroundingSupport};

use super::sources::SourceIndex;

/// Segments the model already cited inline are left alone.
fn already_cited(segment: &str) -> bool {
    segment.contains('[') || segment.ends_with(']')
}

/// Segment text and marker for a support, or `None` if it inserts nothing.
fn planned_marker<'a>(
    chunks: &[GroundingChunk],
    support: &'a GroundingSupport,
    index: &SourceIndex,
) -> Option<(&'a str, String)> {
    let segment = support.text().filter(|t| !t.is_empty())?;
    let reference = index.reference_text(chunks, support)?;
    if already_cited(segment) {
        return None;
    }
    Some((segment, reference))
}

/// Insert markers by replacing the first occurrence of each segment.
///
/// Supports are applied in order against the progressively modified text,
/// so a segment altered by an earlier insertion may no longer be found;
/// such supports are dropped.
pub(super) fn insert_by_substring(
    raw_text: &str,
    chunks: &[GroundingChunk],
    supports: &[GroundingSupport],
    index: &SourceIndex,
) -> String {
    let mut working = raw_text.to_string();

    for support in supports {
        let Some((segment, reference)) = planned_marker(chunks, support, index) else {
            continue;
        };

        match working.find(segment) {
            Some(pos) => {
                let end = pos + segment.len();
                working.insert_str(end, &format!(" {}", reference));
            }
            None => {
                tracing::debug!("[Citation] Segment not found in text, dropping {}", reference);
            }
        }
    }

    working
}

/// Insert markers at offsets computed against the untouched original text.
///
/// Trusted `startIndex..endIndex` bounds win; otherwise the end of the first
/// occurrence of the segment is used. All markers are spliced in one pass,
/// with ties kept in support order.
pub(super) fn insert_by_offsets(
    raw_text: &str,
    chunks: &[GroundingChunk],
    supports: &[GroundingSupport],
    index: &SourceIndex,
) -> String {
    let mut insertions: Vec<(usize, String)> = Vec::new();

    for support in supports {
        let Some((segment, reference)) = planned_marker(chunks, support, index) else {
            continue;
        };

        let offset = trusted_end(raw_text, support, segment)
            .or_else(|| raw_text.find(segment).map(|pos| pos + segment.len()));

        match offset {
            Some(offset) => insertions.push((offset, reference)),
            None => {
                tracing::debug!("[Citation] Segment not found in text, dropping {}", reference);
            }
        }
    }

    insertions.sort_by_key(|(offset, _)| *offset);

    let mut output = String::with_capacity(raw_text.len() + insertions.len() * 4);
    let mut cursor = 0;
    for (offset, reference) in insertions {
        output.push_str(&raw_text[cursor..offset]);
        output.push(' ');
        output.push_str(&reference);
        cursor = offset;
    }
    output.push_str(&raw_text[cursor..]);
    output
}

/// End offset from the segment bounds, if they are in range, on char
/// boundaries and actually cover `segment`.
fn trusted_end(raw_text: &str, support: &GroundingSupport, segment: &str) -> Option<usize> {
    let bounds = support.segment.as_ref()?;
    let start = usize::try_from(bounds.start_index.unwrap_or(0)).ok()?;
    let end = usize::try_from(bounds.end_index?).ok()?;

    let covered = raw_text.get(start..end)?;
    (covered == segment).then_some(end)
}
