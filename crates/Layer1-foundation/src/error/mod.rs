//! Error types for ScriptForge
//!
//! Every layer reports failures through this central type. Each variant
//! corresponds to one terminal outcome of a request; nothing is retried.

use thiserror::Error;

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

/// ScriptForge error type
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration
    // ========================================================================
    #[error("Configuration error: {0}")]
    Config(String),

    // ========================================================================
    // Provider (upstream completion endpoint)
    // ========================================================================
    #[error("Provider error: {0}")]
    Provider(String),

    // ========================================================================
    // Request validation
    // ========================================================================
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid script descriptor: {0}")]
    InvalidDescriptor(String),

    // ========================================================================
    // Execution
    // ========================================================================
    #[error("Execution failed with exit code {exit_code}: {stderr}")]
    Execution { exit_code: i32, stderr: String },

    // ========================================================================
    // Confined directory
    // ========================================================================
    #[error("Access denied: {0}")]
    AccessDenied(String),

    #[error("Not found: {0}")]
    NotFound(String),

    // ========================================================================
    // External error conversions
    // ========================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
