use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::workload::core::capacity::CapacityInfo;
use crate::modules::workload::use_cases::get_capacity::inbound::http::WindowParams;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlCapacityInfo {
    pub total_capacity: f64,
    pub allocated_hours: f64,
    pub available_hours: f64,
    pub utilization_rate: f64,
    pub is_over_allocated: bool,
    pub utilization_level: String,
}

impl From<CapacityInfo> for GqlCapacityInfo {
    fn from(info: CapacityInfo) -> Self {
        Self {
            total_capacity: info.total_capacity,
            allocated_hours: info.allocated_hours,
            available_hours: info.available_hours,
            utilization_rate: info.utilization_rate,
            is_over_allocated: info.is_over_allocated,
            utilization_level: info.utilization_level.as_str().to_string(),
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlProjectHours {
    pub project_id: String,
    pub hours: f64,
}

#[derive(Default)]
pub struct CapacityQuery;

#[Object]
impl CapacityQuery {
    async fn capacity(
        &self,
        context: &Context<'_>,
        user_id: String,
        start: Option<String>,
        end: Option<String>,
    ) -> GqlResult<GqlCapacityInfo> {
        let state = context.data_unchecked::<AppState>();
        let window = WindowParams { start, end }.resolve()?;
        let info = state
            .capacity
            .handle(&user_id, window)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(info.into())
    }

    async fn capacity_by_project(
        &self,
        context: &Context<'_>,
        user_id: String,
        start: Option<String>,
        end: Option<String>,
    ) -> GqlResult<Vec<GqlProjectHours>> {
        let state = context.data_unchecked::<AppState>();
        let window = WindowParams { start, end }.resolve()?;
        let summary = state
            .capacity
            .by_project(&user_id, window)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(summary
            .into_iter()
            .map(|(project_id, hours)| GqlProjectHours { project_id, hours })
            .collect())
    }
}
