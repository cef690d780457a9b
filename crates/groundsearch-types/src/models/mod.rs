//! Domain models for GroundSearch.

pub mod config;
mod payload;
mod source;

pub use config::{
    AppConfig, CitationConfig, CitationStrategy, FormatConfig, ModelConfig, ServerConfig,
    SessionConfig,
};
pub use payload::{ErrorBody, FollowUpRequest, FollowUpResponse, SearchParams, SearchResponse};
pub use source::Source;
