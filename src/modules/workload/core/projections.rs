use crate::modules::workload::core::events::WorkloadEvent;
use crate::modules::workload::use_cases::list_workload_entries::projection::{
    WorkloadPatch, WorkloadRow,
};

#[derive(Debug, Clone, PartialEq)]
pub enum Mutation {
    Upsert(WorkloadRow),
    Patch {
        entry_id: String,
        patch: WorkloadPatch,
        last_event_id: String,
    },
    Remove {
        entry_id: String,
    },
}

pub fn apply(stream_id: &str, version: i64, event: &WorkloadEvent) -> Vec<Mutation> {
    let stream_key = format!("{stream_id}:{version}");
    match event {
        WorkloadEvent::WorkloadAllocatedV1(details) => vec![Mutation::Upsert(WorkloadRow {
            entry_id: details.entry_id.clone(),
            user_id: details.user_id.clone(),
            project_id: details.project_id.clone(),
            task_id: details.task_id.clone(),
            date: details.date,
            allocated_hours: details.allocated_hours,
            actual_hours: details.actual_hours,
            created_at: details.allocated_at,
            created_by: details.allocated_by.clone(),
            updated_at: details.allocated_at,
            updated_by: details.allocated_by.clone(),
            last_event_id: Some(stream_key),
        })],
        WorkloadEvent::AllocationEditedV1(details) => vec![Mutation::Patch {
            entry_id: details.entry_id.clone(),
            patch: WorkloadPatch {
                date: details.date,
                allocated_hours: details.allocated_hours,
                actual_hours: None,
                updated_at: details.edited_at,
                updated_by: details.edited_by.clone(),
            },
            last_event_id: stream_key,
        }],
        WorkloadEvent::ActualHoursRecordedV1(details) => vec![Mutation::Patch {
            entry_id: details.entry_id.clone(),
            patch: WorkloadPatch {
                actual_hours: Some(details.actual_hours),
                updated_at: details.recorded_at,
                updated_by: details.recorded_by.clone(),
                ..WorkloadPatch::default()
            },
            last_event_id: stream_key,
        }],
        WorkloadEvent::AllocationRemovedV1(details) => vec![Mutation::Remove {
            entry_id: details.entry_id.clone(),
        }],
    }
}
