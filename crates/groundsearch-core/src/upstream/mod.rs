//! Hosted model boundary.

mod gemini;
mod tools;

use async_trait::async_trait;
use groundsearch_types::protocol::{GeminiContent, GroundingMetadata};

use crate::error::UpstreamError;

pub use gemini::GeminiClient;
pub use tools::inject_google_search_tool;

/// One model turn.
#[derive(Debug, Clone)]
pub struct ModelReply {
    /// Concatenated visible text of the reply.
    pub text: String,
    pub grounding_metadata: Option<GroundingMetadata>,
    /// Reply content as it must be echoed back in later history.
    pub content: GeminiContent,
}

/// A web-grounded chat model.
///
/// `history` ends with the pending user turn. Implementations do not retry.
#[async_trait]
pub trait ModelClient: Send + Sync {
    async fn generate(&self, history: &[GeminiContent]) -> Result<ModelReply, UpstreamError>;
}
