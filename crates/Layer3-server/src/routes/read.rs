use axum::extract::{Query, State};
use axum::{routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::error::AppResult;
use crate::state::AppState;

/// Query parameters for `GET /read`
#[derive(Deserialize)]
pub struct ReadParams {
    /// Path relative to the confined directory
    path: String,
}

/// Success payload for `GET /read`
#[derive(Serialize)]
pub struct ReadResponse {
    /// Always `"success"`; failures render through [`crate::AppError`]
    pub status: &'static str,
    /// File contents
    pub content: String,
}

/// GET /read?path=... -- read a file back from the confined directory.
///
/// Escapes are refused with 403 before any filesystem access; a missing
/// file is a 404 with a specific message.
async fn read_file(
    State(state): State<AppState>,
    Query(params): Query<ReadParams>,
) -> AppResult<Json<ReadResponse>> {
    let content = state.store.read(&params.path)?;

    Ok(Json(ReadResponse {
        status: "success",
        content,
    }))
}

/// Mount the read route
pub fn router() -> Router<AppState> {
    Router::new().route("/read", get(read_file))
}
