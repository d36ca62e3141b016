// Root event enumeration for workload entries and re-exports of versioned payloads.
//
// Versioning and evolution
// - Prefer additive changes. A breaking change gets a new version and a new variant.
// - Do not change the meaning of historical events.

pub mod v1 {
    pub mod actual_hours_recorded;
    pub mod allocation_edited;
    pub mod allocation_removed;
    pub mod workload_allocated;
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
#[serde(tag = "type")]
pub enum WorkloadEvent {
    WorkloadAllocatedV1(v1::workload_allocated::WorkloadAllocatedV1),
    AllocationEditedV1(v1::allocation_edited::AllocationEditedV1),
    ActualHoursRecordedV1(v1::actual_hours_recorded::ActualHoursRecordedV1),
    AllocationRemovedV1(v1::allocation_removed::AllocationRemovedV1),
}

impl WorkloadEvent {
    pub fn entry_id(&self) -> &str {
        match self {
            Self::WorkloadAllocatedV1(e) => &e.entry_id,
            Self::AllocationEditedV1(e) => &e.entry_id,
            Self::ActualHoursRecordedV1(e) => &e.entry_id,
            Self::AllocationRemovedV1(e) => &e.entry_id,
        }
    }
}

pub fn stream_id_for(entry_id: &str) -> String {
    format!("WorkloadEntry-{entry_id}")
}
