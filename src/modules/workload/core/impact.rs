// Workload impact preview: what a candidate's load would look like after taking a task.
//
// Notes
// - Existing entries for the same task are left out of the current workload, because
//   the proposed plan replaces them. Hours are never counted twice.
// - affected_dates lists plan days that receive hours.

use crate::modules::workload::core::capacity::{OVER_ALLOCATED_THRESHOLD, utilization_rate};
use crate::modules::workload::core::distribution::{DailyHours, planned_total};
use crate::modules::workload::core::entry::{WorkloadEntry, countable_hours};
use crate::shared::core::calendar_day::CalendarDay;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadImpact {
    pub current_workload: f64,
    pub new_workload: f64,
    pub total_capacity: f64,
    pub capacity_utilization: f64,
    pub is_over_allocated: bool,
    pub affected_dates: Vec<CalendarDay>,
}

pub fn assess_impact(
    task_id: &str,
    existing: &[WorkloadEntry],
    total_capacity: f64,
    plan: &[DailyHours],
) -> WorkloadImpact {
    let current_workload: f64 = existing
        .iter()
        .filter(|entry| entry.task_id != task_id)
        .map(|entry| countable_hours(entry.allocated_hours))
        .sum();
    let new_workload = current_workload + planned_total(plan);
    let capacity_utilization = utilization_rate(new_workload, total_capacity);
    WorkloadImpact {
        current_workload,
        new_workload,
        total_capacity: countable_hours(total_capacity),
        capacity_utilization,
        is_over_allocated: capacity_utilization >= OVER_ALLOCATED_THRESHOLD,
        affected_dates: plan
            .iter()
            .filter(|day| day.hours > 0.0)
            .map(|day| day.date)
            .collect(),
    }
}
