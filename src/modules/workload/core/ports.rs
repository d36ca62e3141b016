// Ports describe what the workload core needs from collaborators outside this crate.
//
// Purpose
// - CapacityDirectory: a user's configured working budget.
// - TaskDirectory: task snapshots and project membership.
//
// Boundaries
// - No concrete input or output here. Adapters implement these traits.
// - A missing record is Ok(None) or an empty list. Errors mean the backend failed.

use crate::modules::workload::core::capacity::CapacityProfile;
use crate::modules::workload::core::distribution::DistributionStrategy;
use crate::shared::core::calendar_day::{CalendarDay, CalendarDayError, DateRange};
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TaskSnapshot {
    pub task_id: String,
    pub project_id: String,
    #[serde(default)]
    pub estimated_hours: f64,
    pub start_date: CalendarDay,
    pub end_date: CalendarDay,
    #[serde(default)]
    pub strategy: DistributionStrategy,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub custom_hours: Option<Vec<f64>>,
}

impl TaskSnapshot {
    pub fn window(&self) -> Result<DateRange, CalendarDayError> {
        DateRange::new(self.start_date, self.end_date)
    }
}

#[async_trait]
pub trait CapacityDirectory: Send + Sync {
    async fn profile_of(&self, user_id: &str) -> anyhow::Result<Option<CapacityProfile>>;
}

#[async_trait]
pub trait TaskDirectory: Send + Sync {
    async fn find_task(&self, task_id: &str) -> anyhow::Result<Option<TaskSnapshot>>;
    async fn project_members(&self, project_id: &str) -> anyhow::Result<Vec<String>>;
}
