use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::IntoResponse,
};

use crate::modules::workload::use_cases::plan_distribution::handler::{
    PlanDistributionRequest, handle as plan,
};
use crate::shell::http::error_response;

pub async fn handle(body: Result<Json<PlanDistributionRequest>, JsonRejection>) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(_) => return StatusCode::UNPROCESSABLE_ENTITY.into_response(),
    };
    match plan(&body) {
        Ok(days) => Json(days).into_response(),
        Err(error) => error_response(error),
    }
}
