use crate::modules::workload::core::distribution::{
    DailyHours, DistributionStrategy, PlanOptions, plan_distribution_with,
};
use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::shared::core::calendar_day::{CalendarDay, DateRange};
use serde::Deserialize;

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanDistributionRequest {
    pub total_hours: f64,
    pub start_date: CalendarDay,
    pub end_date: CalendarDay,
    #[serde(default)]
    pub strategy: DistributionStrategy,
    #[serde(default)]
    pub custom_values: Option<Vec<f64>>,
    #[serde(default)]
    pub working_days_only: bool,
}

pub fn handle(request: &PlanDistributionRequest) -> Result<Vec<DailyHours>, ApplicationError> {
    let range = DateRange::new(request.start_date, request.end_date)?;
    let plan = plan_distribution_with(
        request.total_hours,
        range,
        request.strategy,
        request.custom_values.as_deref(),
        PlanOptions {
            working_days_only: request.working_days_only,
        },
    )?;
    tracing::debug!(
        total_hours = request.total_hours,
        days = plan.len(),
        strategy = ?request.strategy,
        "distribution planned"
    );
    Ok(plan)
}
