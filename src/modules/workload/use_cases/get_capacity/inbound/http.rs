use axum::{
    Json,
    extract::{Path, Query, State},
    response::IntoResponse,
};
use serde::Deserialize;

use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::get_capacity::handler::resolve_window;
use crate::shared::core::calendar_day::{CalendarDay, CalendarDayError, DateRange};
use crate::shell::http::error_response;
use crate::shell::state::AppState;

#[derive(Deserialize, Default)]
pub struct WindowParams {
    pub start: Option<String>,
    pub end: Option<String>,
}

impl WindowParams {
    pub fn resolve(&self) -> Result<DateRange, CalendarDayError> {
        resolve_window(
            CalendarDay::parse_opt(self.start.as_deref())?,
            CalendarDay::parse_opt(self.end.as_deref())?,
            CalendarDay::today(),
        )
    }
}

pub async fn handle(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<WindowParams>,
) -> impl IntoResponse {
    let window = match params.resolve() {
        Ok(window) => window,
        Err(error) => return error_response(ApplicationError::from(error)),
    };
    match state.capacity.handle(&user_id, window).await {
        Ok(info) => Json(info).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn by_project(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
    Query(params): Query<WindowParams>,
) -> impl IntoResponse {
    let window = match params.resolve() {
        Ok(window) => window,
        Err(error) => return error_response(ApplicationError::from(error)),
    };
    match state.capacity.by_project(&user_id, window).await {
        Ok(summary) => Json(summary).into_response(),
        Err(error) => error_response(error),
    }
}
