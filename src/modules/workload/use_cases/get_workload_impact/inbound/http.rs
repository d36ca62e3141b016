use axum::{
    Json,
    extract::{Path, State},
    response::IntoResponse,
};

use crate::shell::http::error_response;
use crate::shell::state::AppState;

pub async fn handle(
    State(state): State<AppState>,
    Path((task_id, user_id)): Path<(String, String)>,
) -> impl IntoResponse {
    match state.impact.handle(&task_id, &user_id).await {
        Ok(impact) => Json(impact).into_response(),
        Err(error) => error_response(error),
    }
}
