//! # GroundSearch Types
//!
//! Core types, wire models, and error definitions for GroundSearch.
//!
//! - **`error`** - Typed errors for search requests and configuration
//! - **`models`** - Wire payloads (`Source`, search/follow-up responses) and `AppConfig`
//! - **`protocol`** - Gemini `generateContent` and grounding metadata types
//!
//! ## Architecture Role
//!
//! ```text
//!            groundsearch-types (this crate)
//!                     │
//!        ┌────────────┼─────────────┐
//!        ▼            ▼             ▼
//! groundsearch-core  groundsearch-client
//!        │            │
//!        └─────┬──────┘
//!              ▼
//!     groundsearch-server
//! ```

pub mod error;
pub mod models;
pub mod protocol;

pub use error::{
    ConfigError, Result, SearchError, FOLLOW_UP_FAILURE_MESSAGE, MISSING_FOLLOW_UP_FIELDS_MESSAGE,
    MISSING_QUERY_MESSAGE, SEARCH_FAILURE_MESSAGE, SESSION_NOT_FOUND_MESSAGE,
};

pub use models::{
    AppConfig, CitationConfig, CitationStrategy, ErrorBody, FollowUpRequest, FollowUpResponse,
    FormatConfig, ModelConfig, SearchParams, SearchResponse, ServerConfig, SessionConfig, Source,
};
