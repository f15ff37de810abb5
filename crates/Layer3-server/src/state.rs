use std::sync::Arc;

use scriptforge_core::{ScriptStore, TaskPipeline};

/// Shared application state available to all handlers via `State<AppState>`.
///
/// Cheaply cloneable: the pipeline is behind `Arc` and the store is a path
/// handle.
#[derive(Clone)]
pub struct AppState {
    /// The request-to-execution pipeline behind `POST /run`
    pub pipeline: Arc<TaskPipeline>,
    /// The confined directory behind `GET /read`
    pub store: ScriptStore,
}
