// Distribution planner: spread a task's hours across an inclusive date range.
//
// Strategies
// - Even: equal shares, remainder units go to the first days, one unit each.
// - FrontLoaded: weights n, n-1, ..., 1. Non-increasing. Remainder goes to the first day.
// - BackLoaded: mirror of FrontLoaded. Non-decreasing. Remainder goes to the last day.
// - Custom: caller supplies one value per day. Length and sum are checked, never corrected.
//
// Invariant
// - For valid input the planned hours sum to the requested total exactly.
//   Work happens in integer units of 1h, 0.5h or 0.25h. Those are exact binary
//   fractions, so converting units back to hours loses nothing.

use crate::modules::workload::core::validation::ValidationError;
use crate::shared::core::calendar_day::{CalendarDay, DateRange};
use serde::{Deserialize, Serialize};

const CUSTOM_SUM_TOLERANCE: f64 = 1e-6;

/// Largest unit count an f64 holds exactly (2^53).
const MAX_PLAN_UNITS: f64 = 9_007_199_254_740_992.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DistributionStrategy {
    #[default]
    Even,
    FrontLoaded,
    BackLoaded,
    Custom,
}

/// Strategies computed from the total alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Shape {
    Even,
    FrontLoaded,
    BackLoaded,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Granularity {
    Hour,
    HalfHour,
    QuarterHour,
}

impl Granularity {
    pub fn units_per_hour(self) -> u32 {
        match self {
            Self::Hour => 1,
            Self::HalfHour => 2,
            Self::QuarterHour => 4,
        }
    }

    /// Coarsest granularity that represents `total_hours` exactly.
    pub fn infer(total_hours: f64) -> Result<Self, ValidationError> {
        if !total_hours.is_finite() || total_hours < 0.0 {
            return Err(ValidationError::InvalidTotal(total_hours));
        }
        [Self::Hour, Self::HalfHour, Self::QuarterHour]
            .into_iter()
            .find(|granularity| {
                let scaled = total_hours * f64::from(granularity.units_per_hour());
                scaled.fract() == 0.0
            })
            .ok_or(ValidationError::UnsupportedGranularity(total_hours))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyHours {
    pub date: CalendarDay,
    pub hours: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlanOptions {
    /// Saturdays and Sundays get zero hours and the strategy runs over weekdays only.
    pub working_days_only: bool,
}

pub fn plan_distribution(
    total_hours: f64,
    range: DateRange,
    strategy: DistributionStrategy,
    custom_values: Option<&[f64]>,
) -> Result<Vec<DailyHours>, ValidationError> {
    plan_distribution_with(
        total_hours,
        range,
        strategy,
        custom_values,
        PlanOptions::default(),
    )
}

pub fn plan_distribution_with(
    total_hours: f64,
    range: DateRange,
    strategy: DistributionStrategy,
    custom_values: Option<&[f64]>,
    options: PlanOptions,
) -> Result<Vec<DailyHours>, ValidationError> {
    let days: Vec<CalendarDay> = range.days().collect();
    let shape = match strategy {
        DistributionStrategy::Even => Shape::Even,
        DistributionStrategy::FrontLoaded => Shape::FrontLoaded,
        DistributionStrategy::BackLoaded => Shape::BackLoaded,
        DistributionStrategy::Custom => {
            let values = custom_values.ok_or(ValidationError::MissingCustomValues)?;
            return plan_custom(total_hours, &days, values);
        }
    };

    let granularity = Granularity::infer(total_hours)?;
    let units_per_hour = granularity.units_per_hour();
    let scaled = total_hours * f64::from(units_per_hour);
    if scaled > MAX_PLAN_UNITS {
        return Err(ValidationError::TotalTooLarge(total_hours));
    }
    let total_units = scaled as u64;

    let slots: Vec<usize> = days
        .iter()
        .enumerate()
        .filter(|(_, day)| !(options.working_days_only && day.is_weekend()))
        .map(|(index, _)| index)
        .collect();
    if slots.is_empty() && total_units > 0 {
        return Err(ValidationError::NoWorkingDays {
            start: range.start(),
            end: range.end(),
        });
    }

    let shares = match shape {
        Shape::Even => split_even(total_units, slots.len()),
        Shape::FrontLoaded => split_tapered(total_units, slots.len()),
        Shape::BackLoaded => {
            let mut shares = split_tapered(total_units, slots.len());
            shares.reverse();
            shares
        }
    };

    let mut hours = vec![0.0; days.len()];
    for (slot, units) in slots.into_iter().zip(shares) {
        hours[slot] = units as f64 / f64::from(units_per_hour);
    }
    Ok(days
        .into_iter()
        .zip(hours)
        .map(|(date, hours)| DailyHours { date, hours })
        .collect())
}

fn plan_custom(
    total_hours: f64,
    days: &[CalendarDay],
    values: &[f64],
) -> Result<Vec<DailyHours>, ValidationError> {
    if !total_hours.is_finite() || total_hours < 0.0 {
        return Err(ValidationError::InvalidTotal(total_hours));
    }
    if values.len() != days.len() {
        return Err(ValidationError::CustomLengthMismatch {
            expected: days.len(),
            actual: values.len(),
        });
    }
    if let Some((index, value)) = values
        .iter()
        .enumerate()
        .find(|(_, value)| !value.is_finite() || **value < 0.0)
    {
        return Err(ValidationError::InvalidCustomValue {
            index,
            value: *value,
        });
    }
    let sum: f64 = values.iter().sum();
    if (sum - total_hours).abs() > CUSTOM_SUM_TOLERANCE {
        return Err(ValidationError::CustomSumMismatch {
            expected: total_hours,
            actual: sum,
        });
    }
    Ok(days
        .iter()
        .zip(values)
        .map(|(date, hours)| DailyHours {
            date: *date,
            hours: *hours,
        })
        .collect())
}

fn split_even(units: u64, slots: usize) -> Vec<u64> {
    if slots == 0 {
        return Vec::new();
    }
    let count = slots as u64;
    let base = units / count;
    let remainder = units % count;
    (0..count)
        .map(|index| base + u64::from(index < remainder))
        .collect()
}

fn split_tapered(units: u64, slots: usize) -> Vec<u64> {
    if slots == 0 {
        return Vec::new();
    }
    let count = slots as u128;
    let weight_total = count * (count + 1) / 2;
    let mut shares: Vec<u64> = (0..count)
        .map(|index| (u128::from(units) * (count - index) / weight_total) as u64)
        .collect();
    let assigned: u64 = shares.iter().sum();
    shares[0] += units - assigned;
    shares
}

/// Sum of planned hours.
pub fn planned_total(plan: &[DailyHours]) -> f64 {
    plan.iter().map(|day| day.hours).sum()
}
