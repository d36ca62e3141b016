use axum::{
    Json,
    extract::{Path, State, rejection::JsonRejection},
    http::{HeaderMap, StatusCode},
    response::IntoResponse,
};
use chrono::Utc;
use serde::Deserialize;
use uuid::Uuid;

use crate::modules::workload::use_cases::manage_allocation::command::{
    AllocateWorkload, EditAllocation, RecordActualHours, RemoveAllocation, WorkloadCommand,
};
use crate::shared::core::calendar_day::CalendarDay;
use crate::shell::http::{error_response, issued_by};
use crate::shell::state::AppState;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AllocateWorkloadBody {
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub date: CalendarDay,
    pub allocated_hours: f64,
    #[serde(default)]
    pub actual_hours: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EditAllocationBody {
    #[serde(default)]
    pub date: Option<CalendarDay>,
    #[serde(default)]
    pub allocated_hours: Option<f64>,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordActualHoursBody {
    pub actual_hours: f64,
}

async fn run(state: &AppState, command: WorkloadCommand, success: StatusCode) -> axum::response::Response {
    match state.command_handler.handle(command).await {
        Ok(entry) => (success, Json(entry)).into_response(),
        Err(error) => error_response(error),
    }
}

pub async fn allocate(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Result<Json<AllocateWorkloadBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = WorkloadCommand::Allocate(AllocateWorkload {
        entry_id: Uuid::now_v7().to_string(),
        user_id: body.user_id,
        project_id: body.project_id,
        task_id: body.task_id,
        date: body.date,
        allocated_hours: body.allocated_hours,
        actual_hours: body.actual_hours,
        allocated_at: Utc::now().timestamp_millis(),
        allocated_by: issued_by(&headers),
    });
    run(&state, command, StatusCode::CREATED).await
}

pub async fn edit(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<EditAllocationBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = WorkloadCommand::Edit(EditAllocation {
        entry_id,
        date: body.date,
        allocated_hours: body.allocated_hours,
        edited_at: Utc::now().timestamp_millis(),
        edited_by: issued_by(&headers),
    });
    run(&state, command, StatusCode::OK).await
}

pub async fn record_actual_hours(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
    headers: HeaderMap,
    body: Result<Json<RecordActualHoursBody>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    let command = WorkloadCommand::RecordActualHours(RecordActualHours {
        entry_id,
        actual_hours: body.actual_hours,
        recorded_at: Utc::now().timestamp_millis(),
        recorded_by: issued_by(&headers),
    });
    run(&state, command, StatusCode::OK).await
}

pub async fn remove(
    State(state): State<AppState>,
    Path(entry_id): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    let command = WorkloadCommand::Remove(RemoveAllocation {
        entry_id,
        removed_at: Utc::now().timestamp_millis(),
        removed_by: issued_by(&headers),
    });
    run(&state, command, StatusCode::OK).await
}
