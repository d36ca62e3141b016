use crate::modules::workload::core::distribution::DistributionStrategy;
use crate::modules::workload::core::ports::TaskSnapshot;
use crate::shared::core::calendar_day::CalendarDay;

/// Sixteen hours spread evenly over the working week of 2024-03-11.
pub fn make_task() -> TaskSnapshot {
    TaskSnapshot {
        task_id: "task-fixed-0001".to_string(),
        project_id: "project-fixed-0001".to_string(),
        estimated_hours: 16.0,
        start_date: CalendarDay::parse("2024-03-11").unwrap(),
        end_date: CalendarDay::parse("2024-03-15").unwrap(),
        strategy: DistributionStrategy::Even,
        custom_hours: None,
    }
}
