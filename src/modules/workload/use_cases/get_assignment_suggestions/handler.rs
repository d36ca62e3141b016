// Ranked assignment suggestions for a task.
//
// Notes
// - Candidates are the members of the task's project, measured over the task window.
// - A candidate whose lookup fails or has no capacity data stays in the list as unknown.

use crate::modules::workload::core::capacity::CapacityInfo;
use crate::modules::workload::core::ports::TaskDirectory;
use crate::modules::workload::core::suggestions::{AssignmentSuggestion, Candidate, rank_candidates};
use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::get_capacity::handler::CapacityLookup;
use crate::modules::workload::use_cases::list_workload_entries::queries_port::WorkloadQueries;
use crate::shared::core::calendar_day::DateRange;
use std::sync::Arc;

pub struct GetAssignmentSuggestionsHandler {
    tasks: Arc<dyn TaskDirectory>,
    lookup: CapacityLookup,
    queries: Arc<dyn WorkloadQueries>,
}

impl GetAssignmentSuggestionsHandler {
    pub fn new(
        tasks: Arc<dyn TaskDirectory>,
        lookup: CapacityLookup,
        queries: Arc<dyn WorkloadQueries>,
    ) -> Self {
        Self {
            tasks,
            lookup,
            queries,
        }
    }

    pub async fn handle(&self, task_id: &str) -> Result<Vec<AssignmentSuggestion>, ApplicationError> {
        let task = self
            .tasks
            .find_task(task_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("task {task_id}")))?;
        let window = task.window()?;
        let members = self.tasks.project_members(&task.project_id).await?;

        let mut candidates = Vec::with_capacity(members.len());
        for user_id in members {
            let capacity = self.measure(&user_id, window).await;
            candidates.push(Candidate { user_id, capacity });
        }
        let ranked = rank_candidates(candidates);
        tracing::debug!(task_id, candidates = ranked.len(), "assignment suggestions ranked");
        Ok(ranked)
    }

    async fn measure(&self, user_id: &str, window: DateRange) -> Option<CapacityInfo> {
        let profile = match self.lookup.profile_of(user_id).await {
            Ok(profile) => profile?,
            Err(error) => {
                tracing::warn!(user_id, %error, "capacity lookup failed, ranking as unknown");
                return None;
            }
        };
        match self.queries.list_by_user(user_id, Some(window)).await {
            Ok(entries) => Some(CapacityInfo::from_entries(
                &entries,
                profile.capacity_for(&window),
            )),
            Err(error) => {
                tracing::warn!(user_id, %error, "workload lookup failed, ranking as unknown");
                None
            }
        }
    }
}
