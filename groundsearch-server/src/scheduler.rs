//! Background session eviction.

use std::sync::Arc;
use std::time::Duration;

use groundsearch_core::MemorySessionStore;
use tokio::time::interval;

const SESSION_SWEEP_SECS: u64 = 60;

/// Periodically purge idle sessions. Only started when a TTL is configured.
pub fn start_session_cleanup(sessions: Arc<MemorySessionStore>) {
    tokio::spawn(async move {
        let mut cleanup_interval = interval(Duration::from_secs(SESSION_SWEEP_SECS));
        loop {
            cleanup_interval.tick().await;
            let removed = sessions.purge_expired();
            if removed > 0 {
                tracing::debug!("[Scheduler] Cleaned up {} expired sessions", removed);
            }
        }
    });
}
