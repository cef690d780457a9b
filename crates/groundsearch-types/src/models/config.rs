//! Application configuration.

use serde::{Deserialize, Serialize};
use validator::Validate;

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_MODEL: &str = "gemini-2.0-flash-exp";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Full application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Validate)]
pub struct AppConfig {
    #[serde(default)]
    #[validate(nested)]
    pub server: ServerConfig,
    #[serde(default)]
    #[validate(nested)]
    pub model: ModelConfig,
    #[serde(default)]
    #[validate(nested)]
    pub session: SessionConfig,
    #[serde(default)]
    pub format: FormatConfig,
    #[serde(default)]
    pub citation: CitationConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[validate(range(min = 1_u16))]
    #[serde(default = "default_port")]
    pub port: u16,
    /// Directory of a prebuilt web UI, served as an SPA fallback when set
    #[serde(default)]
    pub static_dir: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: default_host(), port: default_port(), static_dir: None }
    }
}

/// Hosted model configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Validate)]
pub struct ModelConfig {
    #[serde(default)]
    pub api_key: String,
    #[validate(length(min = 1_u64))]
    #[serde(default = "default_model")]
    pub model: String,
    #[validate(url)]
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[validate(range(min = 0.0, max = 2.0))]
    #[serde(default = "default_temperature")]
    pub temperature: f32,
    #[validate(range(min = 0.0, max = 1.0))]
    #[serde(default = "default_top_p")]
    pub top_p: f32,
    #[validate(range(min = 1_u32))]
    #[serde(default = "default_top_k")]
    pub top_k: u32,
    #[validate(range(min = 1_u32))]
    #[serde(default = "default_max_output_tokens")]
    pub max_output_tokens: u32,
    /// No timeout is applied when unset
    #[validate(range(min = 1_u64))]
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            model: default_model(),
            base_url: default_base_url(),
            temperature: default_temperature(),
            top_p: default_top_p(),
            top_k: default_top_k(),
            max_output_tokens: default_max_output_tokens(),
            request_timeout_secs: None,
        }
    }
}

/// Conversation session configuration.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Validate)]
pub struct SessionConfig {
    /// Idle lifetime in seconds; sessions live for the whole process when unset
    #[validate(range(min = 1_u64))]
    #[serde(default)]
    pub ttl_secs: Option<u64>,
}

/// Formatter configuration.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FormatConfig {
    /// Promote `Label:` lines to headings
    #[serde(default = "default_true")]
    pub heading_heuristics: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self { heading_heuristics: true }
    }
}

/// How reference markers are placed into the model text.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CitationStrategy {
    /// Replace the first occurrence of each segment in the working text
    #[default]
    Substring,
    /// Splice at segment offsets computed against the original text
    Offsets,
}

#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CitationConfig {
    #[serde(default)]
    pub strategy: CitationStrategy,
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

pub const fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

pub const fn default_temperature() -> f32 {
    0.9
}

pub const fn default_top_p() -> f32 {
    1.0
}

pub const fn default_top_k() -> u32 {
    1
}

pub const fn default_max_output_tokens() -> u32 {
    2048
}

pub const fn default_true() -> bool {
    true
}
