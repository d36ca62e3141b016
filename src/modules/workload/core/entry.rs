// WorkloadEntry is one allocation of hours to a task for a user on a calendar day.
//
// Notes
// - Identifiers are opaque. Nothing here checks that users, projects or tasks exist.
// - actual_hours is None until hours are logged. None is not zero.

use crate::shared::core::calendar_day::CalendarDay;
use serde::{Deserialize, Serialize};

pub const MAX_DAILY_HOURS: f64 = 24.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkloadEntry {
    pub id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub date: CalendarDay,
    pub allocated_hours: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub actual_hours: Option<f64>,
}

/// Hours that count towards a load. Non-finite or negative values are malformed and count as zero.
pub fn countable_hours(hours: f64) -> f64 {
    if hours.is_finite() && hours > 0.0 {
        hours
    } else {
        0.0
    }
}

pub fn total_allocated(entries: &[WorkloadEntry]) -> f64 {
    entries
        .iter()
        .map(|entry| countable_hours(entry.allocated_hours))
        .sum()
}
