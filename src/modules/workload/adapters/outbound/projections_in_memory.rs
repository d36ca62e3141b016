// In memory projection repository, watermark repository and query side.
//
// Purpose
// - Serve the allocation read model without a database.
//
// Responsibilities
// - Store rows keyed by entry id.
// - Track the last processed event per projector.
// - Answer the WorkloadQueries port from the same rows.

use crate::modules::workload::adapters::outbound::projections::{
    WatermarkRepository, WorkloadProjectionRepository,
};
use crate::modules::workload::core::entry::WorkloadEntry;
use crate::modules::workload::use_cases::list_workload_entries::projection::{
    WorkloadPatch, WorkloadRow,
};
use crate::modules::workload::use_cases::list_workload_entries::queries_port::WorkloadQueries;
use crate::shared::core::calendar_day::DateRange;
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryProjections {
    rows: RwLock<HashMap<String, WorkloadRow>>,
    watermark: RwLock<HashMap<String, String>>,
    is_offline: bool,
}

impl InMemoryProjections {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    fn ensure_online(&self, what: &str) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("{what} offline"));
        }
        Ok(())
    }

    async fn select(&self, keep: impl Fn(&WorkloadRow) -> bool) -> Vec<WorkloadEntry> {
        let guard = self.rows.read().await;
        let mut items: Vec<WorkloadRow> = guard.values().filter(|row| keep(row)).cloned().collect();
        items.sort_by(|a, b| a.date.cmp(&b.date).then_with(|| a.entry_id.cmp(&b.entry_id)));
        items.into_iter().map(WorkloadEntry::from).collect()
    }
}

#[async_trait::async_trait]
impl WorkloadProjectionRepository for InMemoryProjections {
    async fn upsert(&self, row: WorkloadRow) -> anyhow::Result<()> {
        self.ensure_online("Projections repository")?;
        self.rows.write().await.insert(row.entry_id.clone(), row);
        Ok(())
    }

    async fn patch(
        &self,
        entry_id: &str,
        patch: WorkloadPatch,
        last_event_id: &str,
    ) -> anyhow::Result<()> {
        self.ensure_online("Projections repository")?;
        let mut guard = self.rows.write().await;
        let row = guard
            .remove(entry_id)
            .ok_or_else(|| anyhow::anyhow!("Projection row {entry_id} not found"))?;
        guard.insert(
            entry_id.to_string(),
            row.patched(patch, last_event_id.to_string()),
        );
        Ok(())
    }

    async fn remove(&self, entry_id: &str) -> anyhow::Result<()> {
        self.ensure_online("Projections repository")?;
        self.rows.write().await.remove(entry_id);
        Ok(())
    }
}

#[async_trait::async_trait]
impl WatermarkRepository for InMemoryProjections {
    async fn get(&self, name: &str) -> anyhow::Result<Option<String>> {
        self.ensure_online("Watermark repository")?;
        Ok(self.watermark.read().await.get(name).cloned())
    }

    async fn set(&self, name: &str, last: &str) -> anyhow::Result<()> {
        self.ensure_online("Watermark repository")?;
        self.watermark
            .write()
            .await
            .insert(name.to_string(), last.to_string());
        Ok(())
    }
}

#[async_trait::async_trait]
impl WorkloadQueries for InMemoryProjections {
    async fn list_by_user(
        &self,
        user_id: &str,
        window: Option<DateRange>,
    ) -> anyhow::Result<Vec<WorkloadEntry>> {
        self.ensure_online("Projections repository")?;
        Ok(self
            .select(|row| {
                row.user_id == user_id && window.is_none_or(|range| range.contains(&row.date))
            })
            .await)
    }

    async fn list_by_users(
        &self,
        user_ids: &[String],
        window: DateRange,
    ) -> anyhow::Result<Vec<WorkloadEntry>> {
        self.ensure_online("Projections repository")?;
        Ok(self
            .select(|row| user_ids.contains(&row.user_id) && window.contains(&row.date))
            .await)
    }

    async fn list_by_task(&self, task_id: &str) -> anyhow::Result<Vec<WorkloadEntry>> {
        self.ensure_online("Projections repository")?;
        Ok(self.select(|row| row.task_id == task_id).await)
    }

    async fn find_entry(&self, entry_id: &str) -> anyhow::Result<Option<WorkloadEntry>> {
        self.ensure_online("Projections repository")?;
        Ok(self
            .rows
            .read()
            .await
            .get(entry_id)
            .cloned()
            .map(WorkloadEntry::from))
    }
}
