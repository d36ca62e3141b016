use crate::modules::workload::use_cases::list_workload_entries::projection::{
    WorkloadPatch, WorkloadRow,
};
use async_trait::async_trait;

#[async_trait]
pub trait WorkloadProjectionRepository: Send + Sync {
    async fn upsert(&self, row: WorkloadRow) -> anyhow::Result<()>;
    async fn patch(
        &self,
        entry_id: &str,
        patch: WorkloadPatch,
        last_event_id: &str,
    ) -> anyhow::Result<()>;
    async fn remove(&self, entry_id: &str) -> anyhow::Result<()>;
}

#[async_trait]
pub trait WatermarkRepository: Send + Sync {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>>;
    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()>;
}
