use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::workload::core::bucketing::DailyBuckets;
use crate::modules::workload::use_cases::daily_workload::handler::DailyWorkloadView;
use crate::modules::workload::use_cases::get_capacity::inbound::http::WindowParams;
use crate::shell::state::AppState;

/// One cell of the calendar grid.
#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlUserDay {
    pub user_id: String,
    pub date: String,
    pub hours: f64,
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDailyWorkload {
    pub days: Vec<GqlUserDay>,
    pub actual: Vec<GqlUserDay>,
    pub over_allocated: Vec<GqlUserDay>,
}

fn cells(buckets: &DailyBuckets) -> Vec<GqlUserDay> {
    buckets
        .iter()
        .flat_map(|(user_id, days)| {
            days.iter().map(move |(date, hours)| GqlUserDay {
                user_id: user_id.clone(),
                date: date.clone(),
                hours: *hours,
            })
        })
        .collect()
}

impl From<DailyWorkloadView> for GqlDailyWorkload {
    fn from(view: DailyWorkloadView) -> Self {
        let over_allocated = view
            .over_allocated_days
            .iter()
            .flat_map(|(user_id, dates)| {
                let days = &view.days;
                dates.iter().map(move |date| GqlUserDay {
                    user_id: user_id.clone(),
                    date: date.clone(),
                    hours: days
                        .get(user_id)
                        .and_then(|d| d.get(date))
                        .copied()
                        .unwrap_or_default(),
                })
            })
            .collect();
        Self {
            days: cells(&view.days),
            actual: cells(&view.actual),
            over_allocated,
        }
    }
}

#[derive(Default)]
pub struct DailyWorkloadQuery;

#[Object]
impl DailyWorkloadQuery {
    async fn daily_workload(
        &self,
        context: &Context<'_>,
        user_ids: Vec<String>,
        start: Option<String>,
        end: Option<String>,
    ) -> GqlResult<GqlDailyWorkload> {
        let state = context.data_unchecked::<AppState>();
        let window = WindowParams { start, end }.resolve()?;
        let view = state
            .daily
            .handle(&user_ids, window)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(view.into())
    }
}
