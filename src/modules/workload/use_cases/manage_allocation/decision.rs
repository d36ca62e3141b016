use crate::modules::workload::core::events::WorkloadEvent;

#[derive(Debug, thiserror::Error, PartialEq)]
pub enum DecideError {
    #[error("workload entry already exists")]
    AlreadyExists,

    #[error("workload entry does not exist")]
    NotFound,

    #[error("workload entry was removed")]
    AlreadyRemoved,

    #[error("allocated hours must be between 0 and 24, got {0}")]
    InvalidHours(f64),

    #[error("actual hours must be zero or more, got {0}")]
    InvalidActualHours(f64),

    #[error("edit does not change the allocation")]
    NothingToEdit,
}

pub enum Decision {
    Accepted { events: Vec<WorkloadEvent> },
    Rejected { reason: DecideError },
}
