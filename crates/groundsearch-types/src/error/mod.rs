//! Typed error definitions for GroundSearch.
//!
//! Errors are serializable for API responses, displayable for logging and
//! matchable for status mapping.

mod config;
mod search;

pub use config::ConfigError;
pub use search::{
    SearchError, FOLLOW_UP_FAILURE_MESSAGE, MISSING_FOLLOW_UP_FIELDS_MESSAGE, MISSING_QUERY_MESSAGE,
    SEARCH_FAILURE_MESSAGE, SESSION_NOT_FOUND_MESSAGE,
};

/// Standard Result type for request handling.
pub type Result<T> = std::result::Result<T, SearchError>;
