use crate::modules::workload::core::entry::WorkloadEntry;
use crate::shared::core::calendar_day::DateRange;
use async_trait::async_trait;

/// Read side of the allocation store. Lists are ordered by date, then entry id.
#[async_trait]
pub trait WorkloadQueries: Send + Sync {
    /// Entries of one user, limited to `window` when given.
    async fn list_by_user(
        &self,
        user_id: &str,
        window: Option<DateRange>,
    ) -> anyhow::Result<Vec<WorkloadEntry>>;

    async fn list_by_users(
        &self,
        user_ids: &[String],
        window: DateRange,
    ) -> anyhow::Result<Vec<WorkloadEntry>>;

    async fn list_by_task(&self, task_id: &str) -> anyhow::Result<Vec<WorkloadEntry>>;

    async fn find_entry(&self, entry_id: &str) -> anyhow::Result<Option<WorkloadEntry>>;
}
