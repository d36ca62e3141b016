// In memory capacity and task directory.
//
// Purpose
// - Stand in for the user, project and task services during tests and local runs.
//
// Responsibilities
// - Hold capacity profiles per user, task snapshots per task and members per project.
// - Keep project membership in insertion order so suggestion ties stay stable.

use crate::modules::workload::core::capacity::CapacityProfile;
use crate::modules::workload::core::ports::{CapacityDirectory, TaskDirectory, TaskSnapshot};
use std::collections::HashMap;
use tokio::sync::RwLock;

#[derive(Default)]
pub struct InMemoryDirectory {
    profiles: RwLock<HashMap<String, CapacityProfile>>,
    tasks: RwLock<HashMap<String, TaskSnapshot>>,
    members: RwLock<HashMap<String, Vec<String>>>,
    is_offline: bool,
}

impl InMemoryDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn toggle_offline(&mut self) {
        self.is_offline = !self.is_offline;
    }

    pub async fn put_profile(&self, user_id: impl Into<String>, profile: CapacityProfile) {
        self.profiles.write().await.insert(user_id.into(), profile);
    }

    pub async fn put_task(&self, task: TaskSnapshot) {
        self.tasks.write().await.insert(task.task_id.clone(), task);
    }

    pub async fn add_member(&self, project_id: impl Into<String>, user_id: impl Into<String>) {
        let user_id = user_id.into();
        let mut guard = self.members.write().await;
        let members = guard.entry(project_id.into()).or_default();
        if !members.contains(&user_id) {
            members.push(user_id);
        }
    }

    fn ensure_online(&self) -> anyhow::Result<()> {
        if self.is_offline {
            return Err(anyhow::anyhow!("Directory offline"));
        }
        Ok(())
    }
}

#[async_trait::async_trait]
impl CapacityDirectory for InMemoryDirectory {
    async fn profile_of(&self, user_id: &str) -> anyhow::Result<Option<CapacityProfile>> {
        self.ensure_online()?;
        Ok(self.profiles.read().await.get(user_id).copied())
    }
}

#[async_trait::async_trait]
impl TaskDirectory for InMemoryDirectory {
    async fn find_task(&self, task_id: &str) -> anyhow::Result<Option<TaskSnapshot>> {
        self.ensure_online()?;
        Ok(self.tasks.read().await.get(task_id).cloned())
    }

    async fn project_members(&self, project_id: &str) -> anyhow::Result<Vec<String>> {
        self.ensure_online()?;
        Ok(self
            .members
            .read()
            .await
            .get(project_id)
            .cloned()
            .unwrap_or_default())
    }
}
