use crate::modules::workload::core::distribution::plan_distribution;
use crate::modules::workload::core::impact::{WorkloadImpact, assess_impact};
use crate::modules::workload::core::ports::TaskDirectory;
use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::get_capacity::handler::CapacityLookup;
use crate::modules::workload::use_cases::list_workload_entries::queries_port::WorkloadQueries;
use std::sync::Arc;

pub struct GetWorkloadImpactHandler {
    tasks: Arc<dyn TaskDirectory>,
    lookup: CapacityLookup,
    queries: Arc<dyn WorkloadQueries>,
}

impl GetWorkloadImpactHandler {
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

    /// Preview of `candidate_id`'s load over the task window if the task were assigned to them.
    pub async fn handle(
        &self,
        task_id: &str,
        candidate_id: &str,
    ) -> Result<WorkloadImpact, ApplicationError> {
        let task = self
            .tasks
            .find_task(task_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("task {task_id}")))?;
        let window = task.window()?;
        let plan = plan_distribution(
            task.estimated_hours,
            window,
            task.strategy,
            task.custom_hours.as_deref(),
        )?;
        let profile = self.lookup.require_profile_of(candidate_id).await?;
        let existing = self.queries.list_by_user(candidate_id, Some(window)).await?;
        let impact = assess_impact(
            &task.task_id,
            &existing,
            profile.capacity_for(&window),
            &plan,
        );
        tracing::debug!(
            task_id,
            candidate_id,
            new_workload = impact.new_workload,
            over_allocated = impact.is_over_allocated,
            "workload impact computed"
        );
        Ok(impact)
    }
}
