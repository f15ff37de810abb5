use axum::extract::{Query, State};
use axum::{routing::post, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `POST /run`
#[derive(Deserialize)]
pub struct RunParams {
    /// Natural-language task description
    task: String,
}

/// Success payload for `POST /run`
#[derive(Serialize)]
pub struct RunResponse {
    /// Always `"success"`; failures render through [`crate::AppError`]
    pub status: &'static str,
    /// Trimmed stdout of the executed script
    pub output: String,
}

/// POST /run?task=... -- run the full pipeline for one task.
async fn run_task(
    State(state): State<AppState>,
    Query(params): Query<RunParams>,
) -> AppResult<Json<RunResponse>> {
    let output = state.pipeline.run_task(&params.task).await?;

    Ok(Json(RunResponse {
        status: "success",
        output,
    }))
}

/// Mount the run route
pub fn router() -> Router<AppState> {
    Router::new().route("/run", post(run_task))
}
