use async_trait::async_trait;
use reqwest::{header, Client};
use serde_json::Value;
use std::time::Duration;

use groundsearch_types::protocol::{
    GeminiContent, GeminiResponse, GeminiRole, GenerateContentRequest, GenerationConfig,
};
use groundsearch_types::ModelConfig;

use super::tools::inject_google_search_tool;
use super::{ModelClient, ModelReply};
use crate::error::UpstreamError;

const API_KEY_HEADER: &str = "x-goog-api-key";

/// `generateContent` client for the Gemini REST API with Google Search
/// grounding enabled.
pub struct GeminiClient {
    http_client: Client,
    base_url: String,
    model: String,
    api_key: String,
    generation_config: GenerationConfig,
}

impl GeminiClient {
    /// Create a client around a pre-built `reqwest::Client`.
    pub fn new(http_client: Client, config: &ModelConfig) -> Self {
        Self {
            http_client,
            base_url: config.base_url.trim().trim_end_matches('/').to_string(),
            model: config.model.clone(),
            api_key: config.api_key.clone(),
            generation_config: GenerationConfig {
                temperature: config.temperature,
                top_p: config.top_p,
                top_k: config.top_k,
                max_output_tokens: config.max_output_tokens,
            },
        }
    }

    /// Build the HTTP client from config, applying the optional timeout.
    pub fn from_config(config: &ModelConfig) -> Result<Self, UpstreamError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::new(builder.build()?, config))
    }

    pub fn endpoint(&self) -> String {
        format!("{}/models/{}:generateContent", self.base_url, self.model)
    }

    fn build_body(&self, history: &[GeminiContent]) -> Result<Value, UpstreamError> {
        let request = GenerateContentRequest {
            contents: history.to_vec(),
            tools: Vec::new(),
            generation_config: self.generation_config,
        };
        let mut body = serde_json::to_value(request)?;
        inject_google_search_tool(&mut body);
        Ok(body)
    }
}

/// Pull `error.message` out of a Google error envelope, else use the raw body.
fn extract_error_message(status: u16, body: &str) -> String {
    let from_envelope = serde_json::from_str::<Value>(body).ok().and_then(|v| {
        v.get("error")
            .and_then(|e| e.get("message"))
            .and_then(Value::as_str)
            .map(str::to_string)
    });

    match from_envelope {
        Some(message) if !message.trim().is_empty() => message,
        _ if !body.trim().is_empty() => body.trim().to_string(),
        _ => format!("Upstream returned HTTP {}", status),
    }
}

fn into_reply(response: GeminiResponse) -> Result<ModelReply, UpstreamError> {
    if let Some(reason) = response.prompt_feedback.as_ref().and_then(|f| f.block_reason.clone()) {
        return Err(UpstreamError::Blocked { reason });
    }

    let candidate = response
        .candidates
        .and_then(|candidates| candidates.into_iter().next())
        .ok_or(UpstreamError::EmptyResponse)?;

    let mut content = candidate.content.ok_or(UpstreamError::EmptyResponse)?;
    content.role = Some(GeminiRole::Model);
    let text = content.text();

    Ok(ModelReply { text, grounding_metadata: candidate.grounding_metadata, content })
}

#[async_trait]
impl ModelClient for GeminiClient {
    async fn generate(&self, history: &[GeminiContent]) -> Result<ModelReply, UpstreamError> {
        let body = self.build_body(history)?;
        let url = self.endpoint();

        tracing::debug!("[Gemini] POST {} ({} contents)", url, history.len());

        let response = self
            .http_client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = extract_error_message(status.as_u16(), &text);
            tracing::warn!("[Gemini] Upstream error {}: {}", status, message);
            return Err(UpstreamError::Status { status: status.as_u16(), message });
        }

        tracing::debug!("[Gemini] Raw response: {}", text);

        let parsed: GeminiResponse = serde_json::from_str(&text)?;
        let reply = into_reply(parsed)?;

        tracing::debug!("[Gemini] Grounding metadata: {:?}", reply.grounding_metadata);

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn response(value: Value) -> GeminiResponse {
        serde_json::from_value(value).expect("valid response")
    }

    #[test]
    fn test_endpoint_trims_trailing_slash() {
        let config = ModelConfig {
            base_url: "http://localhost:9/v1beta/".to_string(),
            ..ModelConfig::default()
        };
        let client = GeminiClient::new(Client::new(), &config);
        assert_eq!(
            client.endpoint(),
            "http://localhost:9/v1beta/models/gemini-2.0-flash-exp:generateContent"
        );
    }

    #[test]
    fn test_body_shape() {
        let client = GeminiClient::new(Client::new(), &ModelConfig::default());
        let body = client.build_body(&[GeminiContent::user_text("hi")]).expect("body");

        assert_eq!(body["contents"][0]["role"], "user");
        assert_eq!(body["contents"][0]["parts"][0]["text"], "hi");
        assert_eq!(body["tools"], json!([{ "googleSearch": {} }]));
        assert_eq!(body["generationConfig"]["topK"], 1);
        assert_eq!(body["generationConfig"]["maxOutputTokens"], 2048);
    }

    #[test]
    fn test_error_message_extraction() {
        let envelope = r#"{"error": {"code": 429, "message": "Resource exhausted"}}"#;
        assert_eq!(extract_error_message(429, envelope), "Resource exhausted");
        assert_eq!(extract_error_message(502, "bad gateway"), "bad gateway");
        assert_eq!(extract_error_message(500, ""), "Upstream returned HTTP 500");
    }

    #[test]
    fn test_reply_skips_thought_parts() {
        let reply = into_reply(response(json!({
            "candidates": [{
                "content": { "role": "model", "parts": [
                    { "text": "thinking", "thought": true },
                    { "text": "Cats " },
                    { "text": "purr." }
                ]},
                "groundingMetadata": {
                    "groundingChunks": [{ "web": { "uri": "https://a", "title": "A" } }]
                }
            }]
        })))
        .expect("reply");

        assert_eq!(reply.text, "Cats purr.");
        assert_eq!(reply.grounding_metadata.map(|m| m.chunks().len()), Some(1));
    }

    #[test]
    fn test_blocked_prompt() {
        let err = into_reply(response(json!({ "promptFeedback": { "blockReason": "SAFETY" } })))
            .expect_err("blocked");
        assert!(matches!(err, UpstreamError::Blocked { reason } if reason == "SAFETY"));
    }

    #[test]
    fn test_no_candidates() {
        let err = into_reply(response(json!({ "candidates": [] }))).expect_err("empty");
        assert!(matches!(err, UpstreamError::EmptyResponse));
    }
}
