// Daily bucketing for calendar grids.
//
// Purpose
// - Fold a flat list of entries into userId -> "yyyy-MM-dd" -> total hours.
//
// Notes
// - Entries sharing a (user, day) pair are summed, never overwritten.
// - Day keys come from CalendarDay, so a date authored as "2024-03-10" stays on that day.
// - Ordered maps keep equal inputs producing equal outputs.

use crate::modules::workload::core::capacity::{CapacityInfo, CapacityProfile};
use crate::modules::workload::core::entry::{WorkloadEntry, countable_hours};
use crate::shared::core::calendar_day::CalendarDay;
use std::collections::BTreeMap;

pub type UserDays = BTreeMap<String, f64>;
pub type DailyBuckets = BTreeMap<String, UserDays>;

pub fn bucket_by_day(entries: &[WorkloadEntry]) -> DailyBuckets {
    fold_by_day(entries, |entry| Some(entry.allocated_hours))
}

/// Same fold over logged hours. Entries without actual hours are skipped.
pub fn bucket_actual_by_day(entries: &[WorkloadEntry]) -> DailyBuckets {
    fold_by_day(entries, |entry| entry.actual_hours)
}

fn fold_by_day(
    entries: &[WorkloadEntry],
    hours_of: impl Fn(&WorkloadEntry) -> Option<f64>,
) -> DailyBuckets {
    let mut buckets = DailyBuckets::new();
    for entry in entries {
        let Some(hours) = hours_of(entry) else {
            continue;
        };
        *buckets
            .entry(entry.user_id.clone())
            .or_default()
            .entry(entry.date.to_string())
            .or_insert(0.0) += countable_hours(hours);
    }
    buckets
}

/// Days of one user's buckets whose load reaches that day's capacity.
pub fn over_allocated_days(days: &UserDays, profile: &CapacityProfile) -> Vec<String> {
    days.iter()
        .filter(|(day, hours)| {
            CalendarDay::parse(day)
                .map(|day| CapacityInfo::new(profile.capacity_on(&day), **hours).is_over_allocated)
                .unwrap_or(false)
        })
        .map(|(day, _)| day.clone())
        .collect()
}
