use async_graphql::{Context, ID, Object, Result as GqlResult};
use chrono::Utc;
use uuid::Uuid;

use crate::modules::workload::use_cases::list_workload_entries::inbound::graphql::GqlWorkloadEntry;
use crate::modules::workload::use_cases::manage_allocation::command::{
    AllocateWorkload, EditAllocation, RecordActualHours, RemoveAllocation, WorkloadCommand,
};
use crate::shared::core::calendar_day::CalendarDay;
use crate::shell::http::ANONYMOUS_ACTOR;
use crate::shell::state::AppState;

pub struct WorkloadMutation;

async fn run(context: &Context<'_>, command: WorkloadCommand) -> GqlResult<GqlWorkloadEntry> {
    let state = context.data_unchecked::<AppState>();
    let entry = state
        .command_handler
        .handle(command)
        .await
        .map_err(|e| async_graphql::Error::new(e.to_string()))?;
    Ok(entry.into())
}

#[Object]
impl WorkloadMutation {
    #[allow(clippy::too_many_arguments)]
    async fn allocate_workload(
        &self,
        context: &Context<'_>,
        user_id: String,
        project_id: String,
        task_id: String,
        date: String,
        allocated_hours: f64,
        actual_hours: Option<f64>,
    ) -> GqlResult<GqlWorkloadEntry> {
        let command = WorkloadCommand::Allocate(AllocateWorkload {
            entry_id: Uuid::now_v7().to_string(),
            user_id,
            project_id,
            task_id,
            date: CalendarDay::parse(&date)?,
            allocated_hours,
            actual_hours,
            allocated_at: Utc::now().timestamp_millis(),
            allocated_by: ANONYMOUS_ACTOR.into(),
        });
        run(context, command).await
    }

    async fn edit_allocation(
        &self,
        context: &Context<'_>,
        id: ID,
        date: Option<String>,
        allocated_hours: Option<f64>,
    ) -> GqlResult<GqlWorkloadEntry> {
        let command = WorkloadCommand::Edit(EditAllocation {
            entry_id: id.to_string(),
            date: CalendarDay::parse_opt(date.as_deref())?,
            allocated_hours,
            edited_at: Utc::now().timestamp_millis(),
            edited_by: ANONYMOUS_ACTOR.into(),
        });
        run(context, command).await
    }

    async fn record_actual_hours(
        &self,
        context: &Context<'_>,
        id: ID,
        actual_hours: f64,
    ) -> GqlResult<GqlWorkloadEntry> {
        let command = WorkloadCommand::RecordActualHours(RecordActualHours {
            entry_id: id.to_string(),
            actual_hours,
            recorded_at: Utc::now().timestamp_millis(),
            recorded_by: ANONYMOUS_ACTOR.into(),
        });
        run(context, command).await
    }

    async fn remove_allocation(&self, context: &Context<'_>, id: ID) -> GqlResult<GqlWorkloadEntry> {
        let command = WorkloadCommand::Remove(RemoveAllocation {
            entry_id: id.to_string(),
            removed_at: Utc::now().timestamp_millis(),
            removed_by: ANONYMOUS_ACTOR.into(),
        });
        run(context, command).await
    }
}
