use crate::modules::workload::core::bucketing::{
    DailyBuckets, bucket_actual_by_day, bucket_by_day, over_allocated_days,
};
use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::get_capacity::handler::CapacityLookup;
use crate::modules::workload::use_cases::list_workload_entries::queries_port::WorkloadQueries;
use crate::shared::core::calendar_day::DateRange;
use serde::Serialize;
use std::collections::BTreeMap;
use std::sync::Arc;

/// Calendar grid for a set of users: planned and logged hours per day,
/// plus the days on which each user's plan reaches their daily capacity.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyWorkloadView {
    pub days: DailyBuckets,
    pub actual: DailyBuckets,
    pub over_allocated_days: BTreeMap<String, Vec<String>>,
}

pub struct DailyWorkloadHandler {
    lookup: CapacityLookup,
    queries: Arc<dyn WorkloadQueries>,
}

impl DailyWorkloadHandler {
    pub fn new(lookup: CapacityLookup, queries: Arc<dyn WorkloadQueries>) -> Self {
        Self { lookup, queries }
    }

    pub async fn handle(
        &self,
        user_ids: &[String],
        window: DateRange,
    ) -> Result<DailyWorkloadView, ApplicationError> {
        let entries = self.queries.list_by_users(user_ids, window).await?;
        let days = bucket_by_day(&entries);

        let mut over_allocated = BTreeMap::new();
        for (user_id, user_days) in &days {
            match self.lookup.profile_of(user_id).await {
                Ok(Some(profile)) => {
                    let flagged = over_allocated_days(user_days, &profile);
                    if !flagged.is_empty() {
                        over_allocated.insert(user_id.clone(), flagged);
                    }
                }
                Ok(None) => {}
                Err(error) => {
                    tracing::warn!(%user_id, %error, "capacity lookup failed, days not flagged");
                }
            }
        }

        Ok(DailyWorkloadView {
            actual: bucket_actual_by_day(&entries),
            days,
            over_allocated_days: over_allocated,
        })
    }
}
