use crate::modules::workload::core::entry::WorkloadEntry;
use crate::modules::workload::core::events::WorkloadEvent;
use crate::modules::workload::core::state::WorkloadState;

pub fn evolve(state: WorkloadState, event: WorkloadEvent) -> WorkloadState {
    match (state, event) {
        (WorkloadState::None, WorkloadEvent::WorkloadAllocatedV1(e)) => WorkloadState::Active {
            entry: WorkloadEntry {
                id: e.entry_id,
                user_id: e.user_id,
                project_id: e.project_id,
                task_id: e.task_id,
                date: e.date,
                allocated_hours: e.allocated_hours,
                actual_hours: e.actual_hours,
            },
            created_at: e.allocated_at,
            created_by: e.allocated_by.clone(),
            updated_at: e.allocated_at,
            updated_by: e.allocated_by,
        },
        (
            WorkloadState::Active {
                mut entry,
                created_at,
                created_by,
                ..
            },
            WorkloadEvent::AllocationEditedV1(e),
        ) => {
            if let Some(date) = e.date {
                entry.date = date;
            }
            if let Some(hours) = e.allocated_hours {
                entry.allocated_hours = hours;
            }
            WorkloadState::Active {
                entry,
                created_at,
                created_by,
                updated_at: e.edited_at,
                updated_by: e.edited_by,
            }
        }
        (
            WorkloadState::Active {
                mut entry,
                created_at,
                created_by,
                ..
            },
            WorkloadEvent::ActualHoursRecordedV1(e),
        ) => {
            entry.actual_hours = Some(e.actual_hours);
            WorkloadState::Active {
                entry,
                created_at,
                created_by,
                updated_at: e.recorded_at,
                updated_by: e.recorded_by,
            }
        }
        (WorkloadState::Active { entry, .. }, WorkloadEvent::AllocationRemovedV1(e)) => {
            WorkloadState::Removed {
                entry,
                removed_at: e.removed_at,
                removed_by: e.removed_by,
            }
        }
        (state, _) => state,
    }
}
