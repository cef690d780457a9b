//! Test helpers for groundsearch-server unit tests.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use groundsearch_core::{MemorySessionStore, ModelClient, ModelReply, UpstreamError};
use groundsearch_types::protocol::{
    GeminiContent, GroundingChunk, GroundingMetadata, GroundingSupport,
};
use groundsearch_types::AppConfig;

use crate::state::AppState;

/// Model that replays queued replies in order.
#[derive(Default)]
pub struct ScriptedModel {
    replies: Mutex<VecDeque<Result<ModelReply, UpstreamError>>>,
}

impl ScriptedModel {
    pub fn push(&self, reply: Result<ModelReply, UpstreamError>) {
        self.replies.lock().expect("lock").push_back(reply);
    }
}

#[async_trait]
impl ModelClient for ScriptedModel {
    async fn generate(&self, _history: &[GeminiContent]) -> Result<ModelReply, UpstreamError> {
        self.replies.lock().expect("lock").pop_front().unwrap_or(Err(UpstreamError::EmptyResponse))
    }
}

/// "Cats purr." grounded on a single source.
pub fn grounded_reply() -> ModelReply {
    ModelReply {
        text: "Cats purr.".to_string(),
        grounding_metadata: Some(GroundingMetadata {
            web_search_queries: None,
            grounding_chunks: Some(vec![GroundingChunk::web("https://cats.example", "Cats")]),
            grounding_supports: Some(vec![GroundingSupport::new("Cats purr.", &[0])]),
        }),
        content: GeminiContent::model_text("Cats purr."),
    }
}

/// Create a minimal `AppState` backed by a scripted model.
pub fn test_app_state(config: AppConfig) -> (AppState, Arc<ScriptedModel>) {
    let model = Arc::new(ScriptedModel::default());
    let sessions = Arc::new(MemorySessionStore::new());
    let state = AppState::new(config, model.clone(), sessions);
    (state, model)
}
