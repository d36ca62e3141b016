use async_graphql::{Context, Object, Result as GqlResult};

use crate::modules::workload::core::suggestions::AssignmentSuggestion;
use crate::shell::state::AppState;

#[derive(async_graphql::SimpleObject, Clone)]
pub struct GqlAssignmentSuggestion {
    pub user_id: String,
    pub current_capacity: f64,
    pub available_capacity: f64,
    pub utilization_rate: f64,
    pub recommendation_score: f64,
    pub reason: String,
    pub capacity_known: bool,
}

impl From<AssignmentSuggestion> for GqlAssignmentSuggestion {
    fn from(s: AssignmentSuggestion) -> Self {
        Self {
            user_id: s.user_id,
            current_capacity: s.current_capacity,
            available_capacity: s.available_capacity,
            utilization_rate: s.utilization_rate,
            recommendation_score: s.recommendation_score,
            reason: s.reason,
            capacity_known: s.capacity_known,
        }
    }
}

#[derive(Default)]
pub struct AssignmentSuggestionsQuery;

#[Object]
impl AssignmentSuggestionsQuery {
    async fn assignment_suggestions(
        &self,
        context: &Context<'_>,
        task_id: String,
    ) -> GqlResult<Vec<GqlAssignmentSuggestion>> {
        let state = context.data_unchecked::<AppState>();
        let ranked = state
            .suggestions
            .handle(&task_id)
            .await
            .map_err(|e| async_graphql::Error::new(e.to_string()))?;
        Ok(ranked.into_iter().map(Into::into).collect())
    }
}
