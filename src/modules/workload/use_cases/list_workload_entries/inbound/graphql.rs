use async_graphql::{Context, ID, Object, Result as GqlResult};

use crate::modules::workload::core::entry::WorkloadEntry;
use crate::modules::workload::use_cases::get_capacity::handler::resolve_window;
use crate::shared::core::calendar_day::CalendarDay;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlWorkloadEntry {
    pub id: ID,
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub date: String,
    pub allocated_hours: f64,
    pub actual_hours: Option<f64>,
}

impl From<WorkloadEntry> for GqlWorkloadEntry {
    fn from(entry: WorkloadEntry) -> Self {
        Self {
            id: ID(entry.id),
            user_id: entry.user_id,
            project_id: entry.project_id,
            task_id: entry.task_id,
            date: entry.date.to_string(),
            allocated_hours: entry.allocated_hours,
            actual_hours: entry.actual_hours,
        }
    }
}

#[derive(Default)]
pub struct WorkloadEntriesQuery;

#[Object]
impl WorkloadEntriesQuery {
    async fn workload_entries(
        &self,
        context: &Context<'_>,
        user_id: String,
        start: Option<String>,
        end: Option<String>,
    ) -> GqlResult<Vec<GqlWorkloadEntry>> {
        let state = context.data_unchecked::<AppState>();
        let window = if start.is_none() && end.is_none() {
            None
        } else {
            let start = CalendarDay::parse_opt(start.as_deref())?;
            let end = CalendarDay::parse_opt(end.as_deref())?;
            Some(resolve_window(start, end, CalendarDay::today())?)
        };
        let list = state.queries.list_by_user(&user_id, window).await?;
        Ok(list.into_iter().map(Into::into).collect())
    }

    async fn workload_entry(
        &self,
        context: &Context<'_>,
        id: ID,
    ) -> GqlResult<Option<GqlWorkloadEntry>> {
        let state = context.data_unchecked::<AppState>();
        Ok(state.queries.find_entry(&id).await?.map(Into::into))
    }
}
