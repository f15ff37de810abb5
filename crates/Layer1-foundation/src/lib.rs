//! # scriptforge-foundation
//!
//! Foundation layer for ScriptForge:
//! - Error: central error type shared by every layer
//! - Config: environment-driven gateway configuration

pub mod config;
pub mod error;

// ============================================================================
// Error
// ============================================================================
pub use error::{Error, Result};

// ============================================================================
// Config
// ============================================================================
pub use config::GatewayConfig;
