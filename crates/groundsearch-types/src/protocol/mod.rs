//! Wire types for the hosted model service.

pub mod gemini;
pub mod grounding;

pub use gemini::{
    Candidate, GeminiContent, GeminiPart, GeminiResponse, GeminiRole, GenerateContentRequest,
    GenerationConfig, PromptFeedback, UsageMetadata,
};
pub use grounding::{GroundingChunk, GroundingMetadata, GroundingSupport, TextSegment, WebSource};
