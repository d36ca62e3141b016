use axum::{Extension, Router, routing::get};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::{EnvFilter, fmt};

use workload_capacity::modules::workload::adapters::outbound::directory_in_memory::InMemoryDirectory;
use workload_capacity::modules::workload::adapters::outbound::projections_in_memory::InMemoryProjections;
use workload_capacity::modules::workload::core::events::WorkloadEvent;
use workload_capacity::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use workload_capacity::shell::config::AppConfig;
use workload_capacity::shell::graphql::{GRAPHQL_PATH, build_schema, graphiql, graphql};
use workload_capacity::shell::http::router;
use workload_capacity::shell::seed::{apply_seed, load_seed};
use workload_capacity::shell::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::from_env()?;

    // In-memory deps for now
    let event_store = Arc::new(InMemoryEventStore::<WorkloadEvent>::new());
    let projections = Arc::new(InMemoryProjections::new());
    let directory = Arc::new(InMemoryDirectory::new());

    let state = AppState::in_memory(
        event_store,
        projections,
        directory.clone(),
        config.default_profile,
    );

    if let Some(path) = &config.seed_path {
        let seed = load_seed(path)?;
        apply_seed(seed, &directory, &state).await?;
    }

    let schema = build_schema(state.clone());

    let app = Router::new()
        .route(GRAPHQL_PATH, get(graphiql).post(graphql))
        .layer(Extension(schema))
        .merge(router(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr();
    tracing::info!("HTTP endpoint: http://{}", addr);
    tracing::info!("GraphQL endpoint: http://{}{}", addr, GRAPHQL_PATH);
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
