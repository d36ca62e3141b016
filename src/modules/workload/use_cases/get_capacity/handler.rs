// Capacity of one user over a window of calendar days.
//
// Notes
// - A user without a profile falls back to the configured default profile.
// - With neither, the capacity is unknown and the caller gets NotFound.

use crate::modules::workload::core::capacity::{CapacityInfo, CapacityProfile, summarize_by_project};
use crate::modules::workload::core::ports::CapacityDirectory;
use crate::modules::workload::use_cases::errors::ApplicationError;
use crate::modules::workload::use_cases::list_workload_entries::queries_port::WorkloadQueries;
use crate::shared::core::calendar_day::{CalendarDay, CalendarDayError, DateRange};
use std::collections::BTreeMap;
use std::sync::Arc;

#[derive(Clone)]
pub struct CapacityLookup {
    directory: Arc<dyn CapacityDirectory>,
    fallback: Option<CapacityProfile>,
}

impl CapacityLookup {
    pub fn new(directory: Arc<dyn CapacityDirectory>, fallback: Option<CapacityProfile>) -> Self {
        Self {
            directory,
            fallback,
        }
    }

    pub async fn profile_of(&self, user_id: &str) -> anyhow::Result<Option<CapacityProfile>> {
        Ok(self.directory.profile_of(user_id).await?.or(self.fallback))
    }

    pub async fn require_profile_of(
        &self,
        user_id: &str,
    ) -> Result<CapacityProfile, ApplicationError> {
        self.profile_of(user_id)
            .await?
            .ok_or_else(|| ApplicationError::NotFound(format!("capacity profile of user {user_id}")))
    }
}

/// Missing start is the Monday of the week containing `today`; missing end is start plus six days.
pub fn resolve_window(
    start: Option<CalendarDay>,
    end: Option<CalendarDay>,
    today: CalendarDay,
) -> Result<DateRange, CalendarDayError> {
    let start = start.unwrap_or_else(|| today.monday_of_week());
    let end = match end {
        Some(end) => end,
        None => start.add_days(6)?,
    };
    DateRange::new(start, end)
}

pub struct GetCapacityHandler {
    lookup: CapacityLookup,
    queries: Arc<dyn WorkloadQueries>,
}

impl GetCapacityHandler {
    pub fn new(lookup: CapacityLookup, queries: Arc<dyn WorkloadQueries>) -> Self {
        Self { lookup, queries }
    }

    pub async fn handle(
        &self,
        user_id: &str,
        window: DateRange,
    ) -> Result<CapacityInfo, ApplicationError> {
        let profile = self.lookup.require_profile_of(user_id).await?;
        let entries = self.queries.list_by_user(user_id, Some(window)).await?;
        let info = CapacityInfo::from_entries(&entries, profile.capacity_for(&window));
        tracing::debug!(
            user_id,
            start = %window.start(),
            end = %window.end(),
            utilization = info.utilization_rate,
            "capacity computed"
        );
        Ok(info)
    }

    /// Allocated hours per project for one user's window.
    pub async fn by_project(
        &self,
        user_id: &str,
        window: DateRange,
    ) -> Result<BTreeMap<String, f64>, ApplicationError> {
        let entries = self.queries.list_by_user(user_id, Some(window)).await?;
        Ok(summarize_by_project(&entries))
    }
}
