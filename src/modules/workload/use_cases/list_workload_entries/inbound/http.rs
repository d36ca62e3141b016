use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::get_capacity::handler::resolve_window;
use crate::shared::core::calendar_day::CalendarDay;
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize)]
pub struct ListWorkloadParams {
    pub user_id: String,
    pub start: Option<String>,
    pub end: Option<String>,
}

/// Entries of one user. Without start and end every entry is listed.
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListWorkloadParams>,
) -> impl IntoResponse {
    let window = match (params.start.as_deref(), params.end.as_deref()) {
        (None, None) => None,
        (start, end) => {
            let window = CalendarDay::parse_opt(start).and_then(|start| {
                CalendarDay::parse_opt(end)
                    .and_then(|end| resolve_window(start, end, CalendarDay::today()))
            });
            match window {
                Ok(window) => Some(window),
                Err(error) => return error_response(ApplicationError::from(error)),
            }
        }
    };
    match state.queries.list_by_user(&params.user_id, window).await {
        Ok(entries) => Json(entries).into_response(),
        Err(error) => error_response(ApplicationError::from(error)),
    }
}

pub async fn get(State(state): State<AppState>, Path(entry_id): Path<String>) -> impl IntoResponse {
    match state.queries.find_entry(&entry_id).await {
        Ok(Some(entry)) => Json(entry).into_response(),
        Ok(None) => StatusCode::NOT_FOUND.into_response(),
        Err(error) => error_response(ApplicationError::from(error)),
    }
}
