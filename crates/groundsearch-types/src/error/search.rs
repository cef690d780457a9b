//! Search request errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Message returned when `GET /api/search` has no query.
pub const MISSING_QUERY_MESSAGE: &str = "Query parameter 'q' is required";
/// Message returned when `POST /api/follow-up` lacks a field.
pub const MISSING_FOLLOW_UP_FIELDS_MESSAGE: &str = "Both sessionId and query are required";
/// Message returned for an unknown session id.
pub const SESSION_NOT_FOUND_MESSAGE: &str = "Chat session not found";
/// Fallback for a failed search whose upstream error has no text.
pub const SEARCH_FAILURE_MESSAGE: &str = "An error occurred while processing your search";
/// Fallback for a failed follow-up whose upstream error has no text.
pub const FOLLOW_UP_FAILURE_MESSAGE: &str =
    "An error occurred while processing your follow-up question";

/// Errors surfaced by the search and follow-up operations.
///
/// Citation resolution and formatting never fail, so there is no
/// formatting variant.
#[derive(Debug, Clone, Error, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "details")]
pub enum SearchError {
    /// Missing or empty required field (client error)
    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    /// Follow-up referenced a session this process does not know
    #[error("Session not found: {session_id}")]
    SessionNotFound { session_id: String },

    /// Model call failed or returned unusable data
    #[error("Upstream failure: {message}")]
    UpstreamFailure { message: String },
}

impl SearchError {
    pub fn missing_query() -> Self {
        Self::InvalidRequest { message: MISSING_QUERY_MESSAGE.to_string() }
    }

    pub fn missing_follow_up_fields() -> Self {
        Self::InvalidRequest { message: MISSING_FOLLOW_UP_FIELDS_MESSAGE.to_string() }
    }

    /// Get HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            Self::InvalidRequest { .. } => 400,
            Self::SessionNotFound { .. } => 404,
            Self::UpstreamFailure { .. } => 500,
        }
    }

    /// Check if this is a client error (4xx equivalent).
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidRequest { .. } | Self::SessionNotFound { .. })
    }

    /// Message placed in the `{"message": ...}` response body.
    ///
    /// `fallback` is used when an upstream failure carries no text.
    pub fn client_message(&self, fallback: &str) -> String {
        match self {
            Self::InvalidRequest { message } => message.clone(),
            Self::SessionNotFound { .. } => SESSION_NOT_FOUND_MESSAGE.to_string(),
            Self::UpstreamFailure { message } if message.trim().is_empty() => fallback.to_string(),
            Self::UpstreamFailure { message } => message.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_status_codes() {
        assert_eq!(SearchError::missing_query().http_status_code(), 400);
        assert_eq!(
            SearchError::SessionNotFound { session_id: "x".to_string() }.http_status_code(),
            404
        );
        assert_eq!(
            SearchError::UpstreamFailure { message: "boom".to_string() }.http_status_code(),
            500
        );
    }

    #[test]
    fn test_client_messages() {
        assert_eq!(SearchError::missing_query().client_message("x"), MISSING_QUERY_MESSAGE);
        assert_eq!(
            SearchError::SessionNotFound { session_id: "x".to_string() }.client_message("x"),
            SESSION_NOT_FOUND_MESSAGE
        );
        assert_eq!(
            SearchError::UpstreamFailure { message: "quota exceeded".to_string() }
                .client_message("fallback"),
            "quota exceeded"
        );
        assert_eq!(
            SearchError::UpstreamFailure { message: " ".to_string() }.client_message("fallback"),
            "fallback"
        );
    }

    #[test]
    fn test_is_client_error() {
        assert!(SearchError::missing_follow_up_fields().is_client_error());
        assert!(!SearchError::UpstreamFailure { message: String::new() }.is_client_error());
    }
}
