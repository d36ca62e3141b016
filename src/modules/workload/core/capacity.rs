// Capacity aggregation over already-filtered workload entries.
//
// Purpose
// - Turn a user's entries in a window plus a capacity budget into CapacityInfo.
//
// Boundaries
// - Does not filter by user or window. Callers fetch the right slice first.
// - Pure. A zero budget yields a zero utilization rate, never NaN or infinity.

use crate::modules::workload::core::entry::{WorkloadEntry, countable_hours, total_allocated};
use crate::shared::core::calendar_day::{CalendarDay, DateRange};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

pub const BALANCED_THRESHOLD: f64 = 0.5;
pub const BUSY_THRESHOLD: f64 = 0.8;
pub const OVER_ALLOCATED_THRESHOLD: f64 = 1.0;

/// Utilization bracket used for color coding and suggestion reasons.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UtilizationLevel {
    Idle,
    Balanced,
    Busy,
    OverAllocated,
}

impl UtilizationLevel {
    pub fn from_rate(rate: f64) -> Self {
        if rate >= OVER_ALLOCATED_THRESHOLD {
            Self::OverAllocated
        } else if rate >= BUSY_THRESHOLD {
            Self::Busy
        } else if rate >= BALANCED_THRESHOLD {
            Self::Balanced
        } else {
            Self::Idle
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "IDLE",
            Self::Balanced => "BALANCED",
            Self::Busy => "BUSY",
            Self::OverAllocated => "OVER_ALLOCATED",
        }
    }
}

pub fn utilization_rate(allocated_hours: f64, total_capacity: f64) -> f64 {
    if total_capacity.is_finite() && total_capacity > 0.0 {
        countable_hours(allocated_hours) / total_capacity
    } else {
        0.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityInfo {
    pub total_capacity: f64,
    pub allocated_hours: f64,
    pub available_hours: f64,
    pub utilization_rate: f64,
    pub is_over_allocated: bool,
    pub utilization_level: UtilizationLevel,
}

impl CapacityInfo {
    pub fn new(total_capacity: f64, allocated_hours: f64) -> Self {
        let total_capacity = countable_hours(total_capacity);
        let allocated_hours = countable_hours(allocated_hours);
        let utilization_rate = utilization_rate(allocated_hours, total_capacity);
        Self {
            total_capacity,
            allocated_hours,
            available_hours: total_capacity - allocated_hours,
            utilization_rate,
            is_over_allocated: utilization_rate >= OVER_ALLOCATED_THRESHOLD,
            utilization_level: UtilizationLevel::from_rate(utilization_rate),
        }
    }

    pub fn from_entries(entries: &[WorkloadEntry], total_capacity: f64) -> Self {
        Self::new(total_capacity, total_allocated(entries))
    }
}

/// A user's nominal working budget, supplied by configuration outside the core.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CapacityProfile {
    pub daily_hours: f64,
    #[serde(default)]
    pub count_weekends: bool,
}

impl CapacityProfile {
    pub fn new(daily_hours: f64, count_weekends: bool) -> Self {
        Self {
            daily_hours,
            count_weekends,
        }
    }

    pub fn capacity_on(&self, day: &CalendarDay) -> f64 {
        if day.is_weekend() && !self.count_weekends {
            0.0
        } else {
            countable_hours(self.daily_hours)
        }
    }

    pub fn capacity_for(&self, range: &DateRange) -> f64 {
        range.days().map(|day| self.capacity_on(&day)).sum()
    }
}

/// Allocated hours per project. Entries are expected to belong to one user and window.
pub fn summarize_by_project(entries: &[WorkloadEntry]) -> BTreeMap<String, f64> {
    entries.iter().fold(BTreeMap::new(), |mut acc, entry| {
        *acc.entry(entry.project_id.clone()).or_insert(0.0) +=
            countable_hours(entry.allocated_hours);
        acc
    })
}
