use chrono::{DateTime, Duration, Utc};
use dashmap::DashMap;

use super::{SessionStore, SharedConversation};

struct Entry {
    conversation: SharedConversation,
    last_access: DateTime<Utc>,
}

impl Entry {
    fn is_expired(&self, now: DateTime<Utc>, ttl: Option<Duration>) -> bool {
        ttl.is_some_and(|ttl| now - self.last_access >= ttl)
    }
}

/// In-process session map.
///
/// Without a TTL, sessions are never evicted.
#[derive(Default)]
pub struct MemorySessionStore {
    entries: DashMap<String, Entry>,
    ttl: Option<Duration>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store whose sessions expire after `ttl` without access.
    pub fn with_ttl(ttl: Option<Duration>) -> Self {
        Self { entries: DashMap::new(), ttl }
    }

    pub fn from_ttl_secs(ttl_secs: Option<u64>) -> Self {
        let ttl = ttl_secs.and_then(|s| i64::try_from(s).ok()).map(Duration::seconds);
        Self::with_ttl(ttl)
    }

    pub fn ttl(&self) -> Option<Duration> {
        self.ttl
    }

    /// Drop every expired session. Returns how many were removed.
    pub fn purge_expired(&self) -> usize {
        if self.ttl.is_none() {
            return 0;
        }
        let now = Utc::now();
        let before = self.entries.len();
        self.entries.retain(|_, entry| !entry.is_expired(now, self.ttl));
        let removed = before.saturating_sub(self.entries.len());
        if removed > 0 {
            tracing::info!("[Session] Purged {} expired sessions", removed);
        }
        removed
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, session_id: &str) -> Option<SharedConversation> {
        let now = Utc::now();
        let expired =
            self.entries.remove_if(session_id, |_, entry| entry.is_expired(now, self.ttl));
        if expired.is_some() {
            tracing::debug!("[Session] {} expired", session_id);
            return None;
        }

        let mut entry = self.entries.get_mut(session_id)?;
        entry.last_access = now;
        Some(entry.conversation.clone())
    }

    fn put(&self, session_id: String, conversation: SharedConversation) {
        self.entries.insert(session_id, Entry { conversation, last_access: Utc::now() });
    }

    fn delete(&self, session_id: &str) -> bool {
        self.entries.remove(session_id).is_some()
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
