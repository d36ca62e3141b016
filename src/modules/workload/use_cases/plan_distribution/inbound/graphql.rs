use async_graphql::{Object, Result as GqlResult};

use crate::modules::workload::core::distribution::{DailyHours, DistributionStrategy};
use crate::modules::workload::use_cases::plan_distribution::handler::{
    PlanDistributionRequest, handle as plan,
};
use crate::shared::core::calendar_day::CalendarDay;

#[derive(async_graphql::Enum, Copy, Clone, Eq, PartialEq)]
pub enum GqlDistributionStrategy {
    Even,
    FrontLoaded,
    BackLoaded,
    Custom,
}

impl From<GqlDistributionStrategy> for DistributionStrategy {
    fn from(strategy: GqlDistributionStrategy) -> Self {
        match strategy {
            GqlDistributionStrategy::Even => Self::Even,
            GqlDistributionStrategy::FrontLoaded => Self::FrontLoaded,
            GqlDistributionStrategy::BackLoaded => Self::BackLoaded,
            GqlDistributionStrategy::Custom => Self::Custom,
        }
    }
}

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlDailyHours {
    pub date: String,
    pub hours: f64,
}

impl From<DailyHours> for GqlDailyHours {
    fn from(day: DailyHours) -> Self {
        Self {
            date: day.date.to_string(),
            hours: day.hours,
        }
    }
}

#[derive(Default)]
pub struct DistributionQuery;

#[Object]
impl DistributionQuery {
    async fn plan_distribution(
        &self,
        total_hours: f64,
        start_date: String,
        end_date: String,
        strategy: Option<GqlDistributionStrategy>,
        custom_values: Option<Vec<f64>>,
        working_days_only: Option<bool>,
    ) -> GqlResult<Vec<GqlDailyHours>> {
        let request = PlanDistributionRequest {
            total_hours,
            start_date: CalendarDay::parse(&start_date)?,
            end_date: CalendarDay::parse(&end_date)?,
            strategy: strategy.map(Into::into).unwrap_or_default(),
            custom_values,
            working_days_only: working_days_only.unwrap_or(false),
        };
        let plan = plan(&request).map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(plan.into_iter().map(Into::into).collect())
    }
}
