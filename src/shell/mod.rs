// Composition root for the workload bounded context.
//
// Responsibilities
// - Read config from environment.
// - Instantiate concrete infrastructure implementations and seed them.
// - Wire implementations into use case handlers.
// - Expose the HTTP router and the GraphQL schema.

pub mod config;
pub mod graphql;
pub mod http;
pub mod seed;
pub mod state;
