//! Anthropic Messages API wrapper.
//!
//! `client` makes the HTTP calls, `types` holds the wire format. Both agents
//! share one `LlmClient` configuration but keep their own model and prompt.

pub mod client;
pub mod types;

pub use client::{LlmClient, LlmError};
pub use types::{resolve_model, Message, MessagesRequest, MessagesResponse};
