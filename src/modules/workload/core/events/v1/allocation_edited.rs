// Event payload: AllocationEditedV1.
//
// Only the fields that changed are present.

use crate::shared::core::calendar_day::CalendarDay;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct AllocationEditedV1 {
    pub entry_id: String,
    pub date: Option<CalendarDay>,
    pub allocated_hours: Option<f64>,
    pub edited_at: i64,
    pub edited_by: String,
}
