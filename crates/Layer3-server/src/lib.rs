//! # scriptforge-server
//!
//! HTTP surface for ScriptForge:
//! - POST /run?task=... runs the full task pipeline
//! - GET /read?path=... reads a file back from the confined directory
//!
//! The router builder and state live in the library so integration tests
//! drive the exact middleware stack the binary serves.

pub mod error;
pub mod router;
pub mod routes;
pub mod state;

pub use error::{AppError, AppResult};
pub use state::AppState;
