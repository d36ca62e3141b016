use axum::{
    Json, Router,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post, put},
};
use serde_json::json;

use crate::modules::workload::use_cases::daily_workload::inbound::http as daily_http;
use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::get_assignment_suggestions::inbound::http as suggestions_http;
use crate::modules::workload::use_cases::get_capacity::inbound::http as capacity_http;
use crate::modules::workload::use_cases::get_workload_impact::inbound::http as impact_http;
use crate::modules::workload::use_cases::list_workload_entries::inbound::http as list_http;
use crate::modules::workload::use_cases::manage_allocation::inbound::http as allocation_http;
use crate::modules::workload::use_cases::plan_distribution::inbound::http as plan_http;
use crate::shared::infrastructure::event_store::EventStoreError;
use crate::shell::state::AppState;

pub const ACTOR_HEADER: &str = "x-user-id";
pub const ANONYMOUS_ACTOR: &str = "anonymous";

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/capacity/{user_id}", get(capacity_http::handle))
        .route("/capacity/{user_id}/projects", get(capacity_http::by_project))
        .route("/tasks/{task_id}/impact/{user_id}", get(impact_http::handle))
        .route("/tasks/{task_id}/suggestions", get(suggestions_http::handle))
        .route("/distribution/plan", post(plan_http::handle))
        .route("/workload/daily", get(daily_http::handle))
        .route(
            "/workload",
            get(list_http::list).post(allocation_http::allocate),
        )
        .route(
            "/workload/{entry_id}",
            get(list_http::get)
                .patch(allocation_http::edit)
                .delete(allocation_http::remove),
        )
        .route(
            "/workload/{entry_id}/actual-hours",
            put(allocation_http::record_actual_hours),
        )
        .with_state(state)
}

pub fn error_status(error: &ApplicationError) -> StatusCode {
    match error {
        ApplicationError::Validation(_) | ApplicationError::InvalidCommand(_) => {
            StatusCode::UNPROCESSABLE_ENTITY
        }
        ApplicationError::NotFound(_) => StatusCode::NOT_FOUND,
        ApplicationError::Domain(_)
        | ApplicationError::VersionConflict(EventStoreError::VersionMismatch { .. }) => {
            StatusCode::CONFLICT
        }
        ApplicationError::VersionConflict(EventStoreError::Backend(_))
        | ApplicationError::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

pub fn error_response(error: ApplicationError) -> Response {
    let status = error_status(&error);
    if status.is_server_error() {
        tracing::error!(%error, "request failed");
    } else {
        tracing::debug!(%error, %status, "request rejected");
    }
    (status, Json(json!({ "error": error.to_string() }))).into_response()
}

/// Caller identity recorded on events. Authentication happens upstream.
pub fn issued_by(headers: &HeaderMap) -> String {
    headers
        .get(ACTOR_HEADER)
        .and_then(|value| value.to_str().ok())
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .unwrap_or(ANONYMOUS_ACTOR)
        .to_string()
}
