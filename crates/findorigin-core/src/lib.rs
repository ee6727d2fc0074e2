//! FindOrigin Core Library
//!
//! Core functionality for the findorigin source finder.
//!
//! # Features
//! - Pattern-based entity extraction (claims, dates, numbers, names, links)
//! - Search query composition from extracted entities
//! - Source discovery through an OpenAI-compatible completion service
//!   with a model fallback chain and rate-limit retry
//! - Input normalization and rejection of unsupported link references

pub mod config;
pub mod entities;
pub mod error;
pub mod input;
pub mod llm;
pub mod sources;

pub use config::{CompletionConfig, Config};
pub use entities::{build_search_query, extract, Entities, EntityKind, FALLBACK_QUERY};
pub use error::{Error, FindOriginError, Result};
pub use input::{is_telegram_post_link, normalize_text, prepare_input, InputSource, PreparedInput};
pub use llm::{
    ChatMessage, CompletionBackend, CompletionReply, CompletionRequest, HttpCompletionClient,
};
pub use sources::{
    decode_find_result, find_sources, strip_code_fence, AttemptOutcome, Confidence, FindResult,
    ModelAttempt, ModelChain, SourceFinder, SourceSuggestion, SYSTEM_PROMPT,
};

/// Default config directory name
pub const CONFIG_DIR_NAME: &str = "findorigin";
