// Entry and projection row fixtures for calculator and query tests.

use crate::modules::workload::core::entry::WorkloadEntry;
use crate::modules::workload::use_cases::list_workload_entries::projection::WorkloadRow;
use crate::shared::core::calendar_day::CalendarDay;
use uuid::Uuid;

pub fn make_entry(user_id: &str, date: &str, hours: f64) -> WorkloadEntry {
    WorkloadEntry {
        id: format!("we-{}", Uuid::now_v7()),
        user_id: user_id.to_string(),
        project_id: "project-fixed-0001".to_string(),
        task_id: "task-fixed-0001".to_string(),
        date: CalendarDay::parse(date).unwrap(),
        allocated_hours: hours,
        actual_hours: None,
    }
}

pub fn make_row(entry_id: &str, user_id: &str, date: &str, hours: f64) -> WorkloadRow {
    WorkloadRow {
        entry_id: entry_id.to_string(),
        user_id: user_id.to_string(),
        project_id: "project-fixed-0001".to_string(),
        task_id: "task-fixed-0001".to_string(),
        date: CalendarDay::parse(date).unwrap(),
        allocated_hours: hours,
        actual_hours: None,
        created_at: 1700000000000,
        created_by: "user-fixed-0001".to_string(),
        updated_at: 1700000000000,
        updated_by: "user-fixed-0001".to_string(),
        last_event_id: Some(format!("WorkloadEntry-{entry_id}:1")),
    }
}
