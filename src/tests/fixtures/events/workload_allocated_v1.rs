// Shared test fixture for WorkloadAllocatedV1.

use crate::modules::workload::core::events::v1::workload_allocated::WorkloadAllocatedV1;
use crate::tests::fixtures::commands::allocate_workload::AllocateWorkloadBuilder;

/// Builder function returning a canonical event instance for tests.
pub fn make_workload_allocated_v1_event() -> WorkloadAllocatedV1 {
    let command = AllocateWorkloadBuilder::new().build();
    WorkloadAllocatedV1 {
        entry_id: command.entry_id,
        user_id: command.user_id,
        project_id: command.project_id,
        task_id: command.task_id,
        date: command.date,
        allocated_hours: command.allocated_hours,
        actual_hours: command.actual_hours,
        allocated_at: command.allocated_at,
        allocated_by: command.allocated_by,
    }
}
