// Property tests for the workload calculators, exercised through the public crate API.
//
// Responsibilities when you add code
// - Keep these free of adapters and async. The calculators are pure.
// - Prefer a scenario per property over exhaustive grids.

use rstest::rstest;
use workload_capacity::modules::workload::core::bucketing::bucket_by_day;
use workload_capacity::modules::workload::core::capacity::{CapacityInfo, utilization_rate};
use workload_capacity::modules::workload::core::distribution::{
    DistributionStrategy, planned_total, plan_distribution,
};
use workload_capacity::modules::workload::core::entry::WorkloadEntry;
use workload_capacity::modules::workload::core::suggestions::{Candidate, rank_candidates};
use workload_capacity::modules::workload::core::validation::ValidationError;
use workload_capacity::shared::core::calendar_day::{CalendarDay, DateRange};

fn day(value: &str) -> CalendarDay {
    CalendarDay::parse(value).unwrap()
}

fn range(start: &str, end: &str) -> DateRange {
    DateRange::new(day(start), day(end)).unwrap()
}

fn entry(id: &str, user_id: &str, date: &str, hours: f64) -> WorkloadEntry {
    WorkloadEntry {
        id: id.to_string(),
        user_id: user_id.to_string(),
        project_id: "p1".to_string(),
        task_id: "t1".to_string(),
        date: day(date),
        allocated_hours: hours,
        actual_hours: None,
    }
}

#[rstest]
#[case(DistributionStrategy::Even, 40.0)]
#[case(DistributionStrategy::Even, 7.5)]
#[case(DistributionStrategy::FrontLoaded, 40.0)]
#[case(DistributionStrategy::FrontLoaded, 10.25)]
#[case(DistributionStrategy::BackLoaded, 40.0)]
#[case(DistributionStrategy::BackLoaded, 3.0)]
fn plans_always_sum_to_the_requested_total(
    #[case] strategy: DistributionStrategy,
    #[case] total: f64,
) {
    let plan = plan_distribution(total, range("2024-03-11", "2024-03-17"), strategy, None).unwrap();
    assert_eq!(plan.len(), 7);
    assert!((planned_total(&plan) - total).abs() < 1e-9);
}

#[rstest]
fn custom_values_must_cover_every_day() {
    let result = plan_distribution(
        35.0,
        range("2024-03-11", "2024-03-15"),
        DistributionStrategy::Custom,
        Some(&[10.0, 10.0, 10.0, 5.0]),
    );
    assert!(matches!(
        result,
        Err(ValidationError::CustomLengthMismatch { expected: 5, actual: 4 })
    ));
}

#[rstest]
fn custom_values_must_add_up_to_the_total() {
    let result = plan_distribution(
        35.0,
        range("2024-03-11", "2024-03-14"),
        DistributionStrategy::Custom,
        Some(&[10.0, 10.0, 10.0, 10.0]),
    );
    assert!(matches!(result, Err(ValidationError::CustomSumMismatch { .. })));
}

#[rstest]
fn front_loaded_never_rises_and_back_loaded_never_falls() {
    let window = range("2024-03-11", "2024-03-20");
    let front = plan_distribution(37.0, window, DistributionStrategy::FrontLoaded, None).unwrap();
    let back = plan_distribution(37.0, window, DistributionStrategy::BackLoaded, None).unwrap();
    assert!(front.windows(2).all(|pair| pair[0].hours >= pair[1].hours));
    assert!(back.windows(2).all(|pair| pair[0].hours <= pair[1].hours));
    assert!(front[0].hours > front[9].hours);
}

#[rstest]
fn bucketing_is_idempotent_and_sums_shared_days() {
    let entries = vec![
        entry("e1", "u1", "2024-01-01", 4.0),
        entry("e2", "u1", "2024-01-01", 3.0),
        entry("e3", "u2", "2024-01-02", 1.0),
    ];
    let first = bucket_by_day(&entries);
    assert_eq!(first, bucket_by_day(&entries));
    assert_eq!(first["u1"]["2024-01-01"], 7.0);
    assert_eq!(first["u2"]["2024-01-02"], 1.0);
}

#[rstest]
fn a_date_only_string_keeps_its_calendar_day() {
    let buckets = bucket_by_day(&[entry("e1", "u1", "2024-03-10", 2.0)]);
    assert!(buckets["u1"].contains_key("2024-03-10"));
    assert_eq!(day("2024-03-10").to_string(), "2024-03-10");
}

#[rstest]
fn zero_capacity_never_divides() {
    assert_eq!(utilization_rate(12.0, 0.0), 0.0);
    let info = CapacityInfo::new(0.0, 12.0);
    assert_eq!(info.utilization_rate, 0.0);
    assert!(!info.is_over_allocated);
}

#[rstest]
fn the_less_utilized_candidate_ranks_first() {
    let candidates = vec![
        Candidate {
            user_id: "busy".into(),
            capacity: Some(CapacityInfo::new(40.0, 36.0)),
        },
        Candidate {
            user_id: "free".into(),
            capacity: Some(CapacityInfo::new(40.0, 8.0)),
        },
    ];
    let ranked = rank_candidates(candidates);
    assert_eq!(ranked[0].user_id, "free");
    assert!(ranked[0].recommendation_score > ranked[1].recommendation_score);
}
