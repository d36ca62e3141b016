use crate::shared::core::calendar_day::CalendarDay;

#[derive(Debug, Clone, PartialEq)]
pub struct AllocateWorkload {
    pub entry_id: String,
    pub user_id: String,
    pub project_id: String,
    pub task_id: String,
    pub date: CalendarDay,
    pub allocated_hours: f64,
    pub actual_hours: Option<f64>,
    pub allocated_at: i64,
    pub allocated_by: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct EditAllocation {
    pub entry_id: String,
    pub date: Option<CalendarDay>,
    pub allocated_hours: Option<f64>,
    pub edited_at: i64,
    pub edited_by: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RecordActualHours {
    pub entry_id: String,
    pub actual_hours: f64,
    pub recorded_at: i64,
    pub recorded_by: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RemoveAllocation {
    pub entry_id: String,
    pub removed_at: i64,
    pub removed_by: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum WorkloadCommand {
    Allocate(AllocateWorkload),
    Edit(EditAllocation),
    RecordActualHours(RecordActualHours),
    Remove(RemoveAllocation),
}

impl WorkloadCommand {
    pub fn entry_id(&self) -> &str {
        match self {
            Self::Allocate(c) => &c.entry_id,
            Self::Edit(c) => &c.entry_id,
            Self::RecordActualHours(c) => &c.entry_id,
            Self::Remove(c) => &c.entry_id,
        }
    }
}
