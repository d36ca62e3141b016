use crate::modules::workload::core::entry::WorkloadEntry;
use crate::shared::core::calendar_day::CalendarDay;

#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorkloadRow {
    pub entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub date: CalendarDay,
    pub allocated_hours: f64,
    pub actual_hours: Option<f64>,
    pub created_at: i64,
    pub created_by: String,
    pub updated_at: i64,
    pub updated_by: String,
    pub last_event_id: Option<String>,
}

/// Partial update of a row. None leaves the column untouched.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct WorkloadPatch {
    pub date: Option<CalendarDay>,
    pub allocated_hours: Option<f64>,
    pub actual_hours: Option<f64>,
    pub updated_at: i64,
    pub updated_by: String,
}

impl WorkloadRow {
    pub fn patched(mut self, patch: WorkloadPatch, last_event_id: String) -> Self {
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(hours) = patch.allocated_hours {
            self.allocated_hours = hours;
        }
        if let Some(hours) = patch.actual_hours {
            self.actual_hours = Some(hours);
        }
        self.updated_at = patch.updated_at;
        self.updated_by = patch.updated_by;
        self.last_event_id = Some(last_event_id);
        self
    }
}

impl From<WorkloadRow> for WorkloadEntry {
    fn from(row: WorkloadRow) -> Self {
        Self {
            id: row.entry_id,
            user_id: row.user_id,
            project_id: row.project_id,
            task_id: row.task_id,
            date: row.date,
            allocated_hours: row.allocated_hours,
            actual_hours: row.actual_hours,
        }
    }
}
