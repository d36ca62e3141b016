use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::workload::core::impact::WorkloadImpact;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlWorkloadImpact {
    pub current_workload: f64,
    pub new_workload: f64,
    pub total_capacity: f64,
    pub capacity_utilization: f64,
    pub is_over_allocated: bool,
    pub affected_dates: Vec<String>,
}

impl From<WorkloadImpact> for GqlWorkloadImpact {
    fn from(impact: WorkloadImpact) -> Self {
        Self {
            current_workload: impact.current_workload,
            new_workload: impact.new_workload,
            total_capacity: impact.total_capacity,
            capacity_utilization: impact.capacity_utilization,
            is_over_allocated: impact.is_over_allocated,
            affected_dates: impact
                .affected_dates
                .iter()
                .map(ToString::to_string)
                .collect(),
        }
    }
}

#[derive(Default)]
pub struct WorkloadImpactQuery;

#[Object]
impl WorkloadImpactQuery {
    async fn workload_impact(
        &self,
        context: &Context<'_>,
        task_id: String,
        user_id: String,
    ) -> GqlResult<GqlWorkloadImpact> {
        let state = context.data_unchecked::<AppState>();
        let impact = state
            .impact
            .handle(&task_id, &user_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(impact.into())
    }
}
