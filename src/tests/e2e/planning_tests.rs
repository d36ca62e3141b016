use crate::modules::workload::core::capacity::CapacityProfile;
use crate::modules::workload::core::distribution::DistributionStrategy;
use crate::modules::workload::use_cases::manage_allocation::command::WorkloadCommand;
use crate::modules::workload::use_cases::plan_distribution::handler::{
    PlanDistributionRequest, handle as plan,
};
use crate::shared::core::calendar_day::CalendarDay;
use crate::tests::fixtures::commands::allocate_workload::AllocateWorkloadBuilder;
use crate::tests::fixtures::state::{TestApp, make_test_state};
use crate::tests::fixtures::tasks::make_task;
use rstest::rstest;

async fn staffed_project() -> TestApp {
    let test = make_test_state();
    test.directory.put_task(make_task()).await;
    for user in ["u-busy", "u-free"] {
        test.directory.add_member("project-fixed-0001", user).await;
        test.directory
            .put_profile(user, CapacityProfile::new(8.0, false))
            .await;
    }
    for (entry_id, date) in [("we-busy-1", "2024-03-11"), ("we-busy-2", "2024-03-12")] {
        test.state
            .command_handler
            .handle(WorkloadCommand::Allocate(
                AllocateWorkloadBuilder::new()
                    .entry_id(entry_id)
                    .user_id("u-busy")
                    .task_id("task-other")
                    .date(date)
                    .allocated_hours(15.0)
                    .build(),
            ))
            .await
            .unwrap();
    }
    test
}

#[tokio::test]
async fn impact_preview_adds_the_task_plan_to_the_candidate_load() {
    let test = staffed_project().await;

    let busy = test
        .state
        .impact
        .handle("task-fixed-0001", "u-busy")
        .await
        .unwrap();
    assert_eq!(busy.current_workload, 30.0);
    assert_eq!(busy.new_workload, 46.0);
    assert_eq!(busy.total_capacity, 40.0);
    assert!(busy.is_over_allocated);
    assert_eq!(busy.affected_dates.len(), 5);

    let free = test
        .state
        .impact
        .handle("task-fixed-0001", "u-free")
        .await
        .unwrap();
    assert_eq!(free.new_workload, 16.0);
    assert!(!free.is_over_allocated);
}

#[tokio::test]
async fn suggestions_rank_the_idle_member_first() {
    let test = staffed_project().await;

    let ranked = test
        .state
        .suggestions
        .handle("task-fixed-0001")
        .await
        .unwrap();
    let order: Vec<&str> = ranked.iter().map(|s| s.user_id.as_str()).collect();
    assert_eq!(order, vec!["u-free", "u-busy"]);
    assert_eq!(ranked[0].recommendation_score, 100.0);
    assert!(ranked[1].recommendation_score < ranked[0].recommendation_score);
}

#[rstest]
fn plan_matches_the_task_window_it_previews() {
    let task = make_task();
    let request = PlanDistributionRequest {
        total_hours: task.estimated_hours,
        start_date: task.start_date,
        end_date: task.end_date,
        strategy: DistributionStrategy::Even,
        custom_values: None,
        working_days_only: false,
    };
    let days = plan(&request).unwrap();
    let hours: Vec<f64> = days.iter().map(|d| d.hours).collect();
    assert_eq!(hours, vec![4.0, 3.0, 3.0, 3.0, 3.0]);
    assert_eq!(days[0].date, CalendarDay::parse("2024-03-11").unwrap());
}
