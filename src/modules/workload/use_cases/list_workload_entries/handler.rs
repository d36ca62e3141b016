use crate::modules::workload::adapters::outbound::projections::{
    WatermarkRepository, WorkloadProjectionRepository,
};
use crate::modules::workload::core::events::WorkloadEvent;
use crate::modules::workload::core::projections::{Mutation, apply};
use std::sync::Arc;

#[derive(Clone)]
pub struct Projector<TRepository, TWatermarkRepository>
where
    TRepository: WorkloadProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub name: String,
    pub repository: Arc<TRepository>,
    pub watermark_repository: Arc<TWatermarkRepository>,
}

impl<TRepository, TWatermarkRepository> Projector<TRepository, TWatermarkRepository>
where
    TRepository: WorkloadProjectionRepository + Send + Sync + 'static,
    TWatermarkRepository: WatermarkRepository + Send + Sync + 'static,
{
    pub fn new(
        name: impl Into<String>,
        repository: Arc<TRepository>,
        watermark: Arc<TWatermarkRepository>,
    ) -> Self {
        Self {
            name: name.into(),
            repository,
            watermark_repository: watermark,
        }
    }

    /// Watermark key holding the last version of `stream_id` applied by this projector.
    pub fn watermark_key(&self, stream_id: &str) -> String {
        format!("{}:{stream_id}", self.name)
    }

    /// Applies one event. Versions at or below the stream's watermark were already applied and are skipped.
    pub async fn apply_one(
        &self,
        stream_id: &str,
        version: i64,
        event: &WorkloadEvent,
    ) -> anyhow::Result<()> {
        let key = self.watermark_key(stream_id);
        let applied = self
            .watermark_repository
            .get(&key)
            .await?
            .and_then(|last| last.parse::<i64>().ok());
        if applied.is_some_and(|last| last >= version) {
            tracing::debug!(%stream_id, version, "event already projected, skipped");
            return Ok(());
        }

        for mutation in apply(stream_id, version, event) {
            match mutation {
                Mutation::Upsert(row) => self.repository.upsert(row).await?,
                Mutation::Patch {
                    entry_id,
                    patch,
                    last_event_id,
                } => {
                    self.repository
                        .patch(&entry_id, patch, &last_event_id)
                        .await?
                }
                Mutation::Remove { entry_id } => self.repository.remove(&entry_id).await?,
            }
        }
        self.watermark_repository
            .set(&key, &version.to_string())
            .await?;
        Ok(())
    }
}
