// Assignment suggestion ranker.
//
// Contract
// - Lower utilization ranks higher. The score only orders candidates within one call.
// - Every candidate comes back, including those without capacity data.
// - Equal scores keep their input order.

use crate::modules::workload::core::capacity::{CapacityInfo, UtilizationLevel};
use serde::Serialize;

pub const UNKNOWN_CAPACITY_SCORE: f64 = 0.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Candidate {
    pub user_id: String,
    pub capacity: Option<CapacityInfo>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AssignmentSuggestion {
    pub user_id: String,
    pub current_capacity: f64,
    pub available_capacity: f64,
    pub utilization_rate: f64,
    pub recommendation_score: f64,
    pub reason: String,
    pub capacity_known: bool,
}

pub fn recommendation_score(utilization_rate: f64) -> f64 {
    100.0 * (1.0 - utilization_rate)
}

fn reason_for(capacity: Option<&CapacityInfo>) -> String {
    let Some(info) = capacity else {
        return "No capacity data available".to_string();
    };
    let percent = (info.utilization_rate * 100.0).round() as i64;
    match info.utilization_level {
        UtilizationLevel::Idle => format!("Low utilization ({percent}%), plenty of availability"),
        UtilizationLevel::Balanced => {
            format!("Moderate utilization ({percent}%), has room for more work")
        }
        UtilizationLevel::Busy => format!("Near capacity ({percent}%), limited availability"),
        UtilizationLevel::OverAllocated => format!("Over-allocated ({percent}%), already busy"),
    }
}

fn suggest(candidate: Candidate) -> AssignmentSuggestion {
    let reason = reason_for(candidate.capacity.as_ref());
    match candidate.capacity {
        Some(info) => AssignmentSuggestion {
            user_id: candidate.user_id,
            current_capacity: info.total_capacity,
            available_capacity: info.available_hours,
            utilization_rate: info.utilization_rate,
            recommendation_score: recommendation_score(info.utilization_rate),
            reason,
            capacity_known: true,
        },
        None => AssignmentSuggestion {
            user_id: candidate.user_id,
            current_capacity: 0.0,
            available_capacity: 0.0,
            utilization_rate: 0.0,
            recommendation_score: UNKNOWN_CAPACITY_SCORE,
            reason,
            capacity_known: false,
        },
    }
}

pub fn rank_candidates(candidates: Vec<Candidate>) -> Vec<AssignmentSuggestion> {
    let mut suggestions: Vec<AssignmentSuggestion> = candidates.into_iter().map(suggest).collect();
    suggestions.sort_by(|a, b| b.recommendation_score.total_cmp(&a.recommendation_score));
    suggestions
}
