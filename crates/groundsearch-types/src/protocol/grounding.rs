//! Grounding metadata types for web search augmented responses.
//!
//! Every field is optional and decoded leniently: a field with an
//! unexpected shape becomes `None` instead of failing the whole response.
//! Lists degrade per element. A malformed chunk or support keeps its
//! position as an empty entry, and a malformed index or score is dropped.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};

/// Metadata about grounding sources used in a response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingMetadata {
    /// Web search queries that were executed.
    #[serde(default, deserialize_with = "lenient_entries", skip_serializing_if = "Option::is_none")]
    pub web_search_queries: Option<Vec<String>>,
    /// Chunks of grounding information from web sources.
    #[serde(default, deserialize_with = "lenient_slots", skip_serializing_if = "Option::is_none")]
    pub grounding_chunks: Option<Vec<GroundingChunk>>,
    /// Support information linking response to sources.
    #[serde(default, deserialize_with = "lenient_slots", skip_serializing_if = "Option::is_none")]
    pub grounding_supports: Option<Vec<GroundingSupport>>,
}

impl GroundingMetadata {
    pub fn chunks(&self) -> &[GroundingChunk] {
        self.grounding_chunks.as_deref().unwrap_or_default()
    }

    pub fn supports(&self) -> &[GroundingSupport] {
        self.grounding_supports.as_deref().unwrap_or_default()
    }
}

/// A chunk of grounding information.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GroundingChunk {
    /// Web source for this chunk.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub web: Option<WebSource>,
}

impl GroundingChunk {
    pub fn web(uri: &str, title: &str) -> Self {
        let web = WebSource { uri: Some(uri.to_string()), title: Some(title.to_string()) };
        Self { web: Some(web) }
    }

    /// Non-empty URI of the web source, if any.
    pub fn uri(&self) -> Option<&str> {
        self.web.as_ref()?.uri.as_deref().filter(|u| !u.is_empty())
    }

    /// Non-empty title of the web source, if any.
    pub fn title(&self) -> Option<&str> {
        self.web.as_ref()?.title.as_deref().filter(|t| !t.is_empty())
    }
}

/// A web source used for grounding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WebSource {
    /// URI of the web source.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub uri: Option<String>,
    /// Title of the web page.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

/// Support information linking response segments to sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroundingSupport {
    /// Text segment in the response.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub segment: Option<TextSegment>,
    /// Indices of grounding chunks that support this segment.
    #[serde(default, deserialize_with = "lenient_entries", skip_serializing_if = "Option::is_none")]
    pub grounding_chunk_indices: Option<Vec<i64>>,
    /// Confidence scores for each supporting chunk. Carried, never consumed.
    #[serde(default, deserialize_with = "lenient_entries", skip_serializing_if = "Option::is_none")]
    pub confidence_scores: Option<Vec<f64>>,
}

impl GroundingSupport {
    pub fn new(text: &str, chunk_indices: &[i64]) -> Self {
        Self {
            segment: Some(TextSegment {
                start_index: None,
                end_index: None,
                text: Some(text.to_string()),
            }),
            grounding_chunk_indices: Some(chunk_indices.to_vec()),
            confidence_scores: None,
        }
    }

    /// Literal segment text, if present.
    pub fn text(&self) -> Option<&str> {
        self.segment.as_ref()?.text.as_deref()
    }

    pub fn chunk_indices(&self) -> &[i64] {
        self.grounding_chunk_indices.as_deref().unwrap_or_default()
    }

    /// Whether this support cites chunk `position`.
    pub fn cites(&self, position: usize) -> bool {
        self.chunk_indices().iter().any(|&i| usize::try_from(i).ok() == Some(position))
    }
}

/// A segment of text in the response.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TextSegment {
    /// Start byte offset of the segment.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub start_index: Option<i64>,
    /// End byte offset of the segment (exclusive).
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub end_index: Option<i64>,
    /// Text content of the segment.
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
}

fn lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(serde_json::from_value(value).ok())
}

fn lenient_array<'de, D>(deserializer: D) -> Result<Option<Vec<serde_json::Value>>, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::Array(items) => Ok(Some(items)),
        _ => Ok(None),
    }
}

/// Positional list: a malformed element decodes as `T::default()`.
fn lenient_slots<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned + Default,
{
    Ok(lenient_array(deserializer)?.map(|items| {
        items.into_iter().map(|item| serde_json::from_value(item).unwrap_or_default()).collect()
    }))
}

/// Value list: a malformed element is skipped.
fn lenient_entries<'de, D, T>(deserializer: D) -> Result<Option<Vec<T>>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    Ok(lenient_array(deserializer)?.map(|items| {
        items.into_iter().filter_map(|item| serde_json::from_value(item).ok()).collect()
    }))
}
