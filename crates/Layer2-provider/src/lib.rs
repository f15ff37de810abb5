//! # scriptforge-provider
//!
//! Completion endpoint client for ScriptForge:
//! - CompletionProvider: the seam the pipeline depends on
//! - CompletionClient: OpenAI-compatible chat completions over reqwest
//! - SYSTEM_PROMPT: the instructional prompt sent with every task

pub mod client;
pub mod error;
pub mod prompt;

pub use client::{CompletionClient, CompletionProvider};
pub use error::ProviderError;
pub use prompt::SYSTEM_PROMPT;
