//! Model delegation
//!
//! Hands the raw document to a chat-completion model instead of the local
//! transformer. The model's answer is returned as-is: it is not parsed or
//! checked against the record grammar.
//!
//! One request per call, no retries, no timeout. The credential is passed per
//! call and never stored.

mod client;
mod prompt;

pub use client::{parse_completion, ChatMessage, CompletionRequest, ModelClient, ModelConfig};
pub use prompt::{build_prompt, INSTRUCTIONS};
