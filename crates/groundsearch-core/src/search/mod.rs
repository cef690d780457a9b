//! Search and follow-up orchestration.
//!
//! A new search starts a fresh conversation; a follow-up continues the
//! conversation stored under its session id. Both run the model reply
//! through citation resolution and formatting.

mod prompt;


use std::sync::Arc;

use groundsearch_types::protocol::GeminiContent;
use groundsearch_types::{
    AppConfig, CitationStrategy, FollowUpRequest, FollowUpResponse, Result, SearchError,
    SearchResponse, Source,
};

use crate::citation;
use crate::format::Formatter;
use crate::session::{Conversation, SessionStore};
use crate::upstream::ModelClient;

pub use prompt::{build_prompt, CITATION_INSTRUCTION};

struct Answer {
    summary: String,
    sources: Vec<Source>,
}

pub struct SearchService {
    model: Arc<dyn ModelClient>,
    sessions: Arc<dyn SessionStore>,
    formatter: Formatter,
    strategy: CitationStrategy,
}

impl SearchService {
    pub fn new(
        model: Arc<dyn ModelClient>,
        sessions: Arc<dyn SessionStore>,
        formatter: Formatter,
        strategy: CitationStrategy,
    ) -> Self {
        Self { model, sessions, formatter, strategy }
    }

    pub fn from_config(
        model: Arc<dyn ModelClient>,
        sessions: Arc<dyn SessionStore>,
        config: &AppConfig,
    ) -> Self {
        Self::new(model, sessions, Formatter::new(config.format), config.citation.strategy)
    }

    pub fn sessions(&self) -> &Arc<dyn SessionStore> {
        &self.sessions
    }

    /// Start a new conversation.
    ///
    /// The session is stored only once the model has answered.
    pub async fn search(&self, query: Option<&str>) -> Result<SearchResponse> {
        let query = non_empty(query).ok_or_else(SearchError::missing_query)?;
        tracing::info!("[Search] New search: {}", query);

        let mut conversation = Conversation::new();
        let answer = self.exchange(&mut conversation, query).await?;
        let session_id = self.sessions.create(conversation);

        tracing::info!(
            "[Search] Session {} created with {} sources",
            session_id,
            answer.sources.len()
        );

        Ok(SearchResponse { session_id, summary: answer.summary, sources: answer.sources })
    }

    /// Continue an existing conversation.
    ///
    /// Concurrent follow-ups on one session run one after another.
    pub async fn follow_up(&self, request: FollowUpRequest) -> Result<FollowUpResponse> {
        let (Some(session_id), Some(query)) =
            (non_empty(request.session_id.as_deref()), non_empty(request.query.as_deref()))
        else {
            return Err(SearchError::missing_follow_up_fields());
        };

        let handle = self.sessions.get(session_id).ok_or_else(|| {
            tracing::warn!("[Search] Unknown session {}", session_id);
            SearchError::SessionNotFound { session_id: session_id.to_string() }
        })?;

        let mut conversation = handle.lock().await;
        let age = chrono::Utc::now() - conversation.created_at();
        tracing::info!(
            "[Search] Follow-up on {} (turn {}, age {}s): {}",
            session_id,
            conversation.turn_count() + 1,
            age.num_seconds(),
            query
        );

        let answer = self.exchange(&mut conversation, query).await?;

        Ok(FollowUpResponse { summary: answer.summary, sources: answer.sources })
    }

    async fn exchange(&self, conversation: &mut Conversation, query: &str) -> Result<Answer> {
        let user = GeminiContent::user_text(build_prompt(query));

        let reply = self.model.generate(&conversation.with_pending(&user)).await.map_err(|e| {
            match e.status() {
                Some(status) => tracing::error!("[Search] Model call failed ({}): {}", status, e),
                None => tracing::error!("[Search] Model call failed: {}", e),
            }
            SearchError::from(e)
        })?;

        let resolution = citation::resolve_metadata(
            &reply.text,
            reply.grounding_metadata.as_ref(),
            self.strategy,
        );
        let summary = self.formatter.format(&resolution.annotated_text, &resolution.sources);

        conversation.record_turn(user, reply.content);

        Ok(Answer { summary, sources: resolution.sources })
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}
