use crate::error::ClientError;
use crate::types::*;
use groundsearch_types::{ErrorBody, FollowUpRequest};
use reqwest::{Client, Response, StatusCode};
use serde::de::DeserializeOwned;
use std::time::Duration;

pub struct GroundSearchClient {
    client: Client,
    config: ClientConfig,
}

impl GroundSearchClient {
    pub fn new(config: ClientConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self { client: builder.build()?, config })
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.config.base_url.trim_end_matches('/'), path)
    }

    pub async fn health(&self) -> Result<bool, ClientError> {
        let resp = self.client.get(self.url("/health")).send().await?;
        Ok(resp.status().is_success())
    }

    /// Start a new search session.
    pub async fn search(&self, query: &str) -> Result<SearchResponse, ClientError> {
        let resp = self.client.get(self.url("/api/search")).query(&[("q", query)]).send().await?;
        decode(resp).await
    }

    /// Ask a follow-up question on an existing session.
    pub async fn follow_up(
        &self,
        session_id: &str,
        query: &str,
    ) -> Result<FollowUpResponse, ClientError> {
        let body = FollowUpRequest {
            session_id: Some(session_id.to_string()),
            query: Some(query.to_string()),
        };
        let resp = self.client.post(self.url("/api/follow-up")).json(&body).send().await?;
        decode(resp).await
    }

    /// Follow up on `session` when given, otherwise search.
    ///
    /// A lost session (404) is retried once as a new search. Other
    /// follow-up failures are returned as-is.
    pub async fn ask(&self, session: Option<&str>, query: &str) -> Result<Answer, ClientError> {
        let Some(session_id) = session else {
            return self.search(query).await.map(Answer::from);
        };

        match self.follow_up(session_id, query).await {
            Ok(response) => Ok(Answer::continued(session_id, response)),
            Err(ClientError::SessionNotFound { message }) => {
                tracing::info!("Session {} lost ({}), starting a new search", session_id, message);
                self.search(query).await.map(Answer::from)
            }
            Err(e) => Err(e),
        }
    }
}

async fn decode<T: DeserializeOwned>(resp: Response) -> Result<T, ClientError> {
    let status = resp.status();

    if !status.is_success() {
        let raw = resp.text().await.unwrap_or_default();
        let message = serde_json::from_str::<ErrorBody>(&raw).map(|b| b.message).unwrap_or(raw);
        if status == StatusCode::NOT_FOUND {
            return Err(ClientError::SessionNotFound { message });
        }
        return Err(ClientError::Server { status: status.as_u16(), message });
    }

    resp.json().await.map_err(|e| ClientError::InvalidResponse(e.to_string()))
}
