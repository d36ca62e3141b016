use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(State(state): State<AppState>, Path(task_id): Path<String>) -> impl IntoResponse {
    match state.suggestions.handle(&task_id).await {
        Ok(suggestions) => Json(suggestions).into_response(),
        Err(error) => error_response(error),
    }
}
