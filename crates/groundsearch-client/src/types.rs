pub use groundsearch_types::{FollowUpResponse, SearchResponse, Source};

pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub base_url: String,
    /// Whole-request timeout; the server's model call may take several seconds.
    pub timeout_secs: Option<u64>,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_BASE_URL.to_string(), timeout_secs: None }
    }
}

impl ClientConfig {
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self { base_url: base_url.into(), ..Self::default() }
    }
}

/// Result of [`GroundSearchClient::ask`](crate::GroundSearchClient::ask).
#[derive(Debug, Clone, PartialEq)]
pub struct Answer {
    /// Session to use for the next question.
    pub session_id: String,
    pub summary: String,
    pub sources: Vec<Source>,
    /// A new session was started, either because none was given or the
    /// previous one was lost.
    pub new_session: bool,
}

impl From<SearchResponse> for Answer {
    fn from(response: SearchResponse) -> Self {
        Self {
            session_id: response.session_id,
            summary: response.summary,
            sources: response.sources,
            new_session: true,
        }
    }
}

impl Answer {
    pub(crate) fn continued(session_id: &str, response: FollowUpResponse) -> Self {
        Self {
            session_id: session_id.to_string(),
            summary: response.summary,
            sources: response.sources,
            new_session: false,
        }
    }
}
