use crate::modules::workload::core::capacity::CapacityProfile;
use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::manage_allocation::command::{
    EditAllocation, RecordActualHours, RemoveAllocation, WorkloadCommand,
};
use crate::shared::core::calendar_day::{CalendarDay, DateRange};
use crate::tests::fixtures::commands::allocate_workload::AllocateWorkloadBuilder;
use crate::tests::fixtures::state::make_test_state;

fn day(value: &str) -> CalendarDay {
    CalendarDay::parse(value).unwrap()
}

fn week() -> DateRange {
    DateRange::new(day("2024-03-11"), day("2024-03-17")).unwrap()
}

#[tokio::test]
async fn allocation_flows_into_queries_grid_and_capacity() {
    let test = make_test_state();
    test.directory
        .put_profile("user-fixed-0001", CapacityProfile::new(8.0, false))
        .await;
    let handler = &test.state.command_handler;

    handler
        .handle(WorkloadCommand::Allocate(AllocateWorkloadBuilder::new().build()))
        .await
        .unwrap();
    handler
        .handle(WorkloadCommand::Allocate(
            AllocateWorkloadBuilder::new()
                .entry_id("we-fixed-0002")
                .date("2024-03-12")
                .allocated_hours(4.0)
                .build(),
        ))
        .await
        .unwrap();
    handler
        .handle(WorkloadCommand::Edit(EditAllocation {
            entry_id: "we-fixed-0001".into(),
            date: None,
            allocated_hours: Some(10.0),
            edited_at: 1700000100000,
            edited_by: "user-fixed-0001".into(),
        }))
        .await
        .unwrap();
    let recorded = handler
        .handle(WorkloadCommand::RecordActualHours(RecordActualHours {
            entry_id: "we-fixed-0001".into(),
            actual_hours: 9.0,
            recorded_at: 1700000200000,
            recorded_by: "user-fixed-0001".into(),
        }))
        .await
        .unwrap();
    assert_eq!(recorded.allocated_hours, 10.0);
    assert_eq!(recorded.actual_hours, Some(9.0));

    let listed = test
        .state
        .queries
        .list_by_user("user-fixed-0001", Some(week()))
        .await
        .unwrap();
    let ids: Vec<&str> = listed.iter().map(|e| e.id.as_str()).collect();
    assert_eq!(ids, vec!["we-fixed-0001", "we-fixed-0002"]);

    let grid = test
        .state
        .daily
        .handle(&["user-fixed-0001".to_string()], week())
        .await
        .unwrap();
    assert_eq!(grid.days["user-fixed-0001"]["2024-03-11"], 10.0);
    assert_eq!(grid.days["user-fixed-0001"]["2024-03-12"], 4.0);
    assert_eq!(grid.actual["user-fixed-0001"]["2024-03-11"], 9.0);
    assert_eq!(grid.over_allocated_days["user-fixed-0001"], vec!["2024-03-11"]);

    let capacity = test
        .state
        .capacity
        .handle("user-fixed-0001", week())
        .await
        .unwrap();
    assert_eq!(capacity.total_capacity, 40.0);
    assert_eq!(capacity.allocated_hours, 14.0);
    assert_eq!(capacity.available_hours, 26.0);
    assert!(!capacity.is_over_allocated);
}

#[tokio::test]
async fn removed_allocation_leaves_every_read_model() {
    let test = make_test_state();
    test.directory
        .put_profile("user-fixed-0001", CapacityProfile::new(8.0, false))
        .await;
    let handler = &test.state.command_handler;
    handler
        .handle(WorkloadCommand::Allocate(AllocateWorkloadBuilder::new().build()))
        .await
        .unwrap();

    let remove = || {
        WorkloadCommand::Remove(RemoveAllocation {
            entry_id: "we-fixed-0001".into(),
            removed_at: 1700000300000,
            removed_by: "user-fixed-0001".into(),
        })
    };
    handler.handle(remove()).await.unwrap();

    assert_eq!(
        test.state.queries.find_entry("we-fixed-0001").await.unwrap(),
        None
    );
    let grid = test
        .state
        .daily
        .handle(&["user-fixed-0001".to_string()], week())
        .await
        .unwrap();
    assert!(grid.days.is_empty());
    let capacity = test
        .state
        .capacity
        .handle("user-fixed-0001", week())
        .await
        .unwrap();
    assert_eq!(capacity.allocated_hours, 0.0);

    assert!(matches!(
        handler.handle(remove()).await,
        Err(ApplicationError::Domain(_))
    ));
    assert_eq!(test.event_store.stream_count().await, 1);
}
