use crate::shared::core::calendar_day::{CalendarDay, CalendarDayError};
use thiserror::Error;

/// Input rejected by a workload computation. Never corrected silently.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ValidationError {
    #[error(transparent)]
    CalendarDay(#[from] CalendarDayError),

    #[error("total hours must be a finite, non-negative number, got {0}")]
    InvalidTotal(f64),

    #[error("total hours {0} is too large to plan")]
    TotalTooLarge(f64),

    #[error("total hours {0} is not a whole number of quarter hours")]
    UnsupportedGranularity(f64),

    #[error("custom values are required for the custom strategy")]
    MissingCustomValues,

    #[error("custom distribution needs {expected} values, got {actual}")]
    CustomLengthMismatch { expected: usize, actual: usize },

    #[error("custom distribution sums to {actual}, expected {expected}")]
    CustomSumMismatch { expected: f64, actual: f64 },

    #[error("custom value for day {index} must be a finite, non-negative number, got {value}")]
    InvalidCustomValue { index: usize, value: f64 },

    #[error("no working days between {start} and {end}")]
    NoWorkingDays { start: CalendarDay, end: CalendarDay },
}
