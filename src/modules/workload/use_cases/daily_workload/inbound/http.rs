use axum::{
    Json,
    extract::{Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::get_capacity::inbound::http::WindowParams;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct DailyWorkloadParams {
    /// Comma separated user ids.
    pub user_ids: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

pub fn split_user_ids(raw: &str) -> Vec<String> {
    let mut user_ids: Vec<String> = Vec::new();
    for user_id in raw.split(',').map(str::trim).filter(|id| !id.is_empty()) {
        if !user_ids.iter().any(|known| known == user_id) {
            user_ids.push(user_id.to_string());
        }
    }
    user_ids
}

pub async fn handle(
    State(state): State<AppState>,
    Query(params): Query<DailyWorkloadParams>,
) -> impl IntoResponse {
    let window = WindowParams {
        start: params.start,
        end: params.end,
    };
    let window = match window.resolve() {
        Ok(window) => window,
        Err(error) => return error_response(ApplicationError::from(error)),
    };
    let user_ids = split_user_ids(&params.user_ids);
    match state.daily.handle(&user_ids, window).await {
        Ok(view) => Json(view).into_response(),
        Err(error) => error_response(error),
    }
}
