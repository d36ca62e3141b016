// Event payload: ActualHoursRecordedV1.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct ActualHoursRecordedV1 {
    pub entry_id: String,
    pub actual_hours: f64,
    pub recorded_at: i64,
    pub recorded_by: String,
}
