//! # scriptforge-core
//!
//! Core pipeline for ScriptForge:
//! - Descriptor: the three-field record expected from the completion text
//! - Store: the confined directory (materialization + confined reads)
//! - Executor: the narrow interface that turns an artifact into a process
//! - Pipeline: task submission through execution, strictly sequential

pub mod descriptor;
pub mod executor;
pub mod pipeline;
pub mod store;

pub use descriptor::{ScriptDescriptor, ScriptLanguage};
pub use executor::{LocalExecutor, ScriptExecutor};
pub use pipeline::TaskPipeline;
pub use store::ScriptStore;
