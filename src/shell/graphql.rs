use async_graphql::{EmptySubscription, MergedObject, Schema, http::GraphiQLSource};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::workload::use_cases::daily_workload::inbound::graphql::DailyWorkloadQuery;
use crate::modules::workload::use_cases::get_assignment_suggestions::inbound::graphql::AssignmentSuggestionsQuery;
use crate::modules::workload::use_cases::get_capacity::inbound::graphql::CapacityQuery;
use crate::modules::workload::use_cases::get_workload_impact::inbound::graphql::WorkloadImpactQuery;
use crate::modules::workload::use_cases::list_workload_entries::inbound::graphql::WorkloadEntriesQuery;
pub use crate::modules::workload::use_cases::manage_allocation::inbound::graphql::WorkloadMutation as MutationRoot;
use crate::modules::workload::use_cases::plan_distribution::inbound::graphql::DistributionQuery;
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/gql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(
    CapacityQuery,
    WorkloadImpactQuery,
    AssignmentSuggestionsQuery,
    DistributionQuery,
    DailyWorkloadQuery,
    WorkloadEntriesQuery,
);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn build_schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot, EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
