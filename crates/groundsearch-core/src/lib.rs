//! # GroundSearch Core
//!
//! Business logic for the grounded search assistant.
//!
//! ```text
//! groundsearch-core/src/
//! ├── citation/   # grounding metadata → numbered sources + [n] markers
//! ├── format/     # annotated text → HTML summary
//! ├── session/    # conversation store
//! ├── upstream/   # Gemini generateContent client
//! ├── search/     # search / follow-up orchestration
//! └── modules/    # config loading, logger
//! ```

#![allow(
    clippy::redundant_else,
    reason = "Explicit else blocks improve readability in complex control flow"
)]
#![allow(clippy::implicit_clone, reason = "Explicit .clone() vs .to_string() is stylistic")]
#![allow(
    clippy::derive_partial_eq_without_eq,
    reason = "Some types intentionally don't implement Eq"
)]
// Test-only lints: allow panic!, expect, etc. in test code
#![cfg_attr(
    test,
    allow(
        clippy::panic,
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::float_cmp,
        clippy::assertions_on_result_states
    )
)]

pub mod citation;
pub mod common;
pub mod error;
pub mod format;
pub mod modules;
pub mod search;
pub mod session;
pub mod upstream;

// Re-export commonly used types
pub use citation::{resolve, resolve_metadata, resolve_with, Resolution};
pub use error::UpstreamError;
pub use format::Formatter;
pub use search::SearchService;
pub use session::{Conversation, MemorySessionStore, SessionStore, SharedConversation};
pub use upstream::{GeminiClient, ModelClient, ModelReply};
