//! Request and response bodies for the HTTP API.

use serde::{Deserialize, Serialize};

use super::source::Source;

/// Query string of `GET /api/search`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub q: Option<String>,
}

/// Body of `POST /api/follow-up`.
///
/// Both fields are optional on the wire so that a missing field surfaces
/// as an `InvalidRequest` instead of a deserialization rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FollowUpRequest {
    #[serde(default)]
    pub session_id: Option<String>,
    #[serde(default)]
    pub query: Option<String>,
}

/// Result of a new search.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SearchResponse {
    pub session_id: String,
    /// Rendered HTML, stylesheet included.
    pub summary: String,
    pub sources: Vec<Source>,
}

/// Result of a follow-up; the caller keeps using its existing session id.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FollowUpResponse {
    pub summary: String,
    pub sources: Vec<Source>,
}

/// Error body shared by every non-2xx API response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ErrorBody {
    pub message: String,
}
