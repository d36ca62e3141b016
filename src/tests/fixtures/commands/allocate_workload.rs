// Shared test fixture for the AllocateWorkload command.
// Compiled into the crate only during tests, exposed as crate::tests::fixtures.

use crate::modules::workload::use_cases::manage_allocation::command::AllocateWorkload;
use crate::shared::core::calendar_day::CalendarDay;
use serde::Deserialize;
use std::fs;

// JSON -> DTO (transport shape)
#[derive(Debug, Clone, Deserialize)]
pub struct AllocateWorkloadDto {
    pub entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub date: CalendarDay,
    pub allocated_hours: f64,
    #[serde(default)]
    pub actual_hours: Option<f64>,
}

pub struct AllocateWorkloadBuilder {
    inner: AllocateWorkload,
}

impl Default for AllocateWorkloadBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[allow(dead_code)]
impl AllocateWorkloadBuilder {
    pub fn new() -> Self {
        let json_str =
            fs::read_to_string("./src/tests/fixtures/commands/json/allocate_workload.json").unwrap();
        let dto: AllocateWorkloadDto = serde_json::from_str(&json_str).unwrap();

        Self {
            inner: AllocateWorkload {
                entry_id: dto.entry_id,
                user_id: dto.user_id,
                project_id: dto.project_id,
                task_id: dto.task_id,
                date: dto.date,
                allocated_hours: dto.allocated_hours,
                actual_hours: dto.actual_hours,
                allocated_at: 1700000000000,
                allocated_by: "user-fixed-0001".to_string(),
            },
        }
    }

    pub fn entry_id(mut self, v: impl Into<String>) -> Self {
        self.inner.entry_id = v.into();
        self
    }

    pub fn user_id(mut self, v: impl Into<String>) -> Self {
        self.inner.user_id = v.into();
        self
    }

    pub fn project_id(mut self, v: impl Into<String>) -> Self {
        self.inner.project_id = v.into();
        self
    }

    pub fn task_id(mut self, v: impl Into<String>) -> Self {
        self.inner.task_id = v.into();
        self
    }

    pub fn date(mut self, v: &str) -> Self {
        self.inner.date = CalendarDay::parse(v).unwrap();
        self
    }

    pub fn allocated_hours(mut self, v: f64) -> Self {
        self.inner.allocated_hours = v;
        self
    }

    pub fn actual_hours(mut self, v: Option<f64>) -> Self {
        self.inner.actual_hours = v;
        self
    }

    pub fn allocated_at(mut self, v: i64) -> Self {
        self.inner.allocated_at = v;
        self
    }

    pub fn allocated_by(mut self, v: impl Into<String>) -> Self {
        self.inner.allocated_by = v.into();
        self
    }

    pub fn build(self) -> AllocateWorkload {
        self.inner
    }
}

#[cfg(test)]
mod allocate_workload_builder_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn default_delegates_to_new_and_parses_json() {
        let built = AllocateWorkloadBuilder::default().build();
        assert_eq!(built.entry_id, "we-fixed-0001");
        assert_eq!(built.user_id, "user-fixed-0001");
        assert_eq!(built.project_id, "project-fixed-0001");
        assert_eq!(built.task_id, "task-fixed-0001");
        assert_eq!(built.date.to_string(), "2024-03-11");
        assert_eq!(built.allocated_hours, 6.0);
        assert_eq!(built.actual_hours, None);
        assert_eq!(built.allocated_by, "user-fixed-0001");
        assert_eq!(built.allocated_at, 1_700_000_000_000i64);
    }

    #[rstest]
    fn setters_override_all_fields_and_build_returns_inner() {
        let custom = AllocateWorkloadBuilder::new()
            .entry_id("we-123")
            .user_id("uid-456")
            .project_id("pid-789")
            .task_id("tid-000")
            .date("2024-04-01")
            .allocated_hours(3.5)
            .actual_hours(Some(4.0))
            .allocated_at(3333)
            .allocated_by("tester")
            .build();

        assert_eq!(custom.entry_id, "we-123");
        assert_eq!(custom.user_id, "uid-456");
        assert_eq!(custom.project_id, "pid-789");
        assert_eq!(custom.task_id, "tid-000");
        assert_eq!(custom.date.to_string(), "2024-04-01");
        assert_eq!(custom.allocated_hours, 3.5);
        assert_eq!(custom.actual_hours, Some(4.0));
        assert_eq!(custom.allocated_at, 3333);
        assert_eq!(custom.allocated_by, "tester");
    }
}
