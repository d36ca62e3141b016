use crate::modules::workload::core::validation::ValidationError;
use crate::shared::core::calendar_day::CalendarDayError;
use crate::shared::infrastructure::event_store::EventStoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ApplicationError {
    #[error(transparent)]
    VersionConflict(#[from] EventStoreError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("invalid command: {0}")]
    InvalidCommand(String),

    #[error("not found: {0}")]
    NotFound(String),

    #[error("domain rejected: {0}")]
    Domain(String),

    #[error("unexpected: {0}")]
    Unexpected(String),
}

impl From<CalendarDayError> for ApplicationError {
    fn from(error: CalendarDayError) -> Self {
        Self::Validation(ValidationError::from(error))
    }
}

impl From<anyhow::Error> for ApplicationError {
    fn from(error: anyhow::Error) -> Self {
        Self::Unexpected(error.to_string())
    }
}

#[cfg(test)]
mod application_error_tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    fn it_should_wrap_calendar_day_errors_as_validation() {
        let error = ApplicationError::from(CalendarDayError::Invalid("tomorrow".into()));
        assert!(matches!(
            error,
            ApplicationError::Validation(ValidationError::CalendarDay(_))
        ));
    }

    #[rstest]
    fn it_should_wrap_port_failures_as_unexpected() {
        let error = ApplicationError::from(anyhow::anyhow!("Directory offline"));
        assert_eq!(error.to_string(), "unexpected: Directory offline");
    }
}
