//! Conversation sessions.
//!
//! A session maps an opaque id to the turn history of one model
//! conversation. The store is a capability trait; the default
//! [`MemorySessionStore`] lives for the process and is lost on restart.

mod memory;

use std::sync::Arc;

use chrono::{DateTime, Utc};
use groundsearch_types::protocol::GeminiContent;
use tokio::sync::Mutex;

use crate::common::generate_session_id;

pub use memory::MemorySessionStore;

/// Conversation handle shared between the store and in-flight requests.
///
/// Holding the mutex for a whole follow-up serializes concurrent
/// follow-ups on the same session.
pub type SharedConversation = Arc<Mutex<Conversation>>;

/// Full turn history of one model conversation.
#[derive(Debug, Clone)]
pub struct Conversation {
    history: Vec<GeminiContent>,
    created_at: DateTime<Utc>,
}

impl Default for Conversation {
    fn default() -> Self {
        Self::new()
    }
}

impl Conversation {
    pub fn new() -> Self {
        Self { history: Vec::new(), created_at: Utc::now() }
    }

    pub fn history(&self) -> &[GeminiContent] {
        &self.history
    }

    /// History plus a pending user turn, as sent to the model.
    pub fn with_pending(&self, user: &GeminiContent) -> Vec<GeminiContent> {
        let mut contents = Vec::with_capacity(self.history.len() + 1);
        contents.extend_from_slice(&self.history);
        contents.push(user.clone());
        contents
    }

    /// Append a completed exchange.
    pub fn record_turn(&mut self, user: GeminiContent, model: GeminiContent) {
        self.history.push(user);
        self.history.push(model);
    }

    /// Number of completed exchanges.
    pub fn turn_count(&self) -> usize {
        self.history.len() / 2
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}

/// Key-value store of conversations.
pub trait SessionStore: Send + Sync {
    /// Look up a live session.
    fn get(&self, session_id: &str) -> Option<SharedConversation>;

    fn put(&self, session_id: String, conversation: SharedConversation);

    /// Returns whether a session was removed.
    fn delete(&self, session_id: &str) -> bool;

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Store a conversation under a freshly generated id.
    fn create(&self, conversation: Conversation) -> String {
        let session_id = generate_session_id();
        self.put(session_id.clone(), Arc::new(Mutex::new(conversation)));
        session_id
    }
}
