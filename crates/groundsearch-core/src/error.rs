//! Model client errors.

use groundsearch_types::SearchError;
use thiserror::Error;

/// Failure of a single call to the hosted model.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum UpstreamError {
    /// Transport failure (connect, TLS, timeout).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Non-2xx response from the model service.
    #[error("{message}")]
    Status { status: u16, message: String },

    /// Response body was not a valid `generateContent` reply.
    #[error("Invalid model response: {0}")]
    Decode(#[from] serde_json::Error),

    /// Response carried no candidate.
    #[error("Model returned no candidates")]
    EmptyResponse,

    /// Prompt was rejected by safety filters.
    #[error("Prompt blocked: {reason}")]
    Blocked { reason: String },
}

impl UpstreamError {
    /// Upstream HTTP status, if the service answered.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::Status { status, .. } => Some(*status),
            Self::Network(e) => e.status().map(|s| s.as_u16()),
            _ => None,
        }
    }
}

impl From<UpstreamError> for SearchError {
    fn from(e: UpstreamError) -> Self {
        SearchError::UpstreamFailure { message: e.to_string() }
    }
}
