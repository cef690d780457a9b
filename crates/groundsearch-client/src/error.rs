//! Error types for the GroundSearch client.

use thiserror::Error;

/// Errors that can occur when using the GroundSearch client.
#[derive(Error, Debug)]
pub enum ClientError {
    /// HTTP request failed.
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Follow-up referenced a session the server does not know.
    #[error("Session not found: {message}")]
    SessionNotFound {
        /// Error message from server.
        message: String,
    },

    /// Server returned any other non-2xx status.
    #[error("Server error ({status}): {message}")]
    Server {
        /// HTTP status code.
        status: u16,
        /// Error message from server.
        message: String,
    },

    /// Server returned an invalid or unparseable response.
    #[error("Invalid response: {0}")]
    InvalidResponse(String),
}

impl ClientError {
    /// Status code reported by the server, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            Self::SessionNotFound { .. } => Some(404),
            Self::Server { status, .. } => Some(*status),
            Self::Request(e) => e.status().map(|s| s.as_u16()),
            Self::InvalidResponse(_) => None,
        }
    }
}
