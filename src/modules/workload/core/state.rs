use crate::modules::workload::core::entry::WorkloadEntry;

#[derive(Debug, Clone, PartialEq)]
pub enum WorkloadState {
    None,
    Active {
        entry: WorkloadEntry,
        created_at: i64,
        created_by: String,
        updated_at: i64,
        updated_by: String,
    },
    Removed {
        entry: WorkloadEntry,
        removed_at: i64,
        removed_by: String,
    },
}

impl WorkloadState {
    pub fn entry(&self) -> Option<&WorkloadEntry> {
        match self {
            Self::None => None,
            Self::Active { entry, .. } | Self::Removed { entry, .. } => Some(entry),
        }
    }
}
