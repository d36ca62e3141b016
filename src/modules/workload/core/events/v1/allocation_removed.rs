// Event payload: AllocationRemovedV1.

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq)]
pub struct AllocationRemovedV1 {
    pub entry_id: String,
    pub removed_at: i64,
    pub removed_by: String,
}
