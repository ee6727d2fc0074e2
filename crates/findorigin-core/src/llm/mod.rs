//! LLM integration
//!
//! Provides the completion-backend seam used by source discovery and an
//! HTTP implementation for OpenAI-compatible services (OpenRouter, vLLM, ...).

mod client;

pub use client::{
    ChatMessage, CompletionBackend, CompletionReply, CompletionRequest, HttpCompletionClient,
};
