use crate::modules::workload::core::entry::MAX_DAILY_HOURS;
use crate::modules::workload::core::events::{
    WorkloadEvent,
    v1::{
        actual_hours_recorded::ActualHoursRecordedV1, allocation_edited::AllocationEditedV1,
        allocation_removed::AllocationRemovedV1, workload_allocated::WorkloadAllocatedV1,
    },
};
use crate::modules::workload::core::state::WorkloadState;
use crate::modules::workload::use_cases::manage_allocation::{
    command::{
        AllocateWorkload, EditAllocation, RecordActualHours, RemoveAllocation, WorkloadCommand,
    },
    decision::{DecideError, Decision},
};

pub fn decide(state: &WorkloadState, command: WorkloadCommand) -> Decision {
    match command {
        WorkloadCommand::Allocate(command) => decide_allocate(state, command),
        WorkloadCommand::Edit(command) => decide_edit(state, command),
        WorkloadCommand::RecordActualHours(command) => decide_record_actual_hours(state, command),
        WorkloadCommand::Remove(command) => decide_remove(state, command),
    }
}

fn valid_allocated_hours(hours: f64) -> bool {
    hours.is_finite() && (0.0..=MAX_DAILY_HOURS).contains(&hours)
}

fn valid_actual_hours(hours: f64) -> bool {
    hours.is_finite() && hours >= 0.0
}

fn rejected(reason: DecideError) -> Decision {
    Decision::Rejected { reason }
}

/// Rejection for a command that needs an active allocation.
fn not_active(state: &WorkloadState) -> DecideError {
    match state {
        WorkloadState::Removed { .. } => DecideError::AlreadyRemoved,
        _ => DecideError::NotFound,
    }
}

pub fn decide_allocate(state: &WorkloadState, command: AllocateWorkload) -> Decision {
    if !matches!(state, WorkloadState::None) {
        return rejected(DecideError::AlreadyExists);
    }
    if !valid_allocated_hours(command.allocated_hours) {
        return rejected(DecideError::InvalidHours(command.allocated_hours));
    }
    if let Some(actual) = command.actual_hours.filter(|h| !valid_actual_hours(*h)) {
        return rejected(DecideError::InvalidActualHours(actual));
    }
    Decision::Accepted {
        events: vec![WorkloadEvent::WorkloadAllocatedV1(WorkloadAllocatedV1 {
            entry_id: command.entry_id,
            user_id: command.user_id,
            project_id: command.project_id,
            task_id: command.task_id,
            date: command.date,
            allocated_hours: command.allocated_hours,
            actual_hours: command.actual_hours,
            allocated_at: command.allocated_at,
            allocated_by: command.allocated_by,
        })],
    }
}

pub fn decide_edit(state: &WorkloadState, command: EditAllocation) -> Decision {
    let WorkloadState::Active { entry, .. } = state else {
        return rejected(not_active(state));
    };
    if let Some(hours) = command.allocated_hours.filter(|h| !valid_allocated_hours(*h)) {
        return rejected(DecideError::InvalidHours(hours));
    }
    let date = command.date.filter(|date| *date != entry.date);
    let allocated_hours = command
        .allocated_hours
        .filter(|hours| *hours != entry.allocated_hours);
    if date.is_none() && allocated_hours.is_none() {
        return rejected(DecideError::NothingToEdit);
    }
    Decision::Accepted {
        events: vec![WorkloadEvent::AllocationEditedV1(AllocationEditedV1 {
            entry_id: command.entry_id,
            date,
            allocated_hours,
            edited_at: command.edited_at,
            edited_by: command.edited_by,
        })],
    }
}

pub fn decide_record_actual_hours(state: &WorkloadState, command: RecordActualHours) -> Decision {
    if !matches!(state, WorkloadState::Active { .. }) {
        return rejected(not_active(state));
    }
    if !valid_actual_hours(command.actual_hours) {
        return rejected(DecideError::InvalidActualHours(command.actual_hours));
    }
    Decision::Accepted {
        events: vec![WorkloadEvent::ActualHoursRecordedV1(ActualHoursRecordedV1 {
            entry_id: command.entry_id,
            actual_hours: command.actual_hours,
            recorded_at: command.recorded_at,
            recorded_by: command.recorded_by,
        })],
    }
}

pub fn decide_remove(state: &WorkloadState, command: RemoveAllocation) -> Decision {
    if !matches!(state, WorkloadState::Active { .. }) {
        return rejected(not_active(state));
    }
    Decision::Accepted {
        events: vec![WorkloadEvent::AllocationRemovedV1(AllocationRemovedV1 {
            entry_id: command.entry_id,
            removed_at: command.removed_at,
            removed_by: command.removed_by,
        })],
    }
}
