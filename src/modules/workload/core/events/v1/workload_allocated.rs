// Event payload: WorkloadAllocatedV1.
//
// Records that hours were allocated to a task for a user on one calendar day.
// Timestamps are epoch milliseconds.

use crate::shared::core::calendar_day::CalendarDay;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct WorkloadAllocatedV1 {
    pub entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub date: CalendarDay,
    pub allocated_hours: f64,
    pub actual_hours: Option<f64>,
    pub allocated_at: i64,
    pub allocated_by: String,
}
