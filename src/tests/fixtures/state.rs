// Wired in-memory application for handler and router tests.

use crate::modules::workload::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::workload::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::workload::core::events::WorkloadEvent;
use crate::shell::state::AppState;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

pub struct TestApp {
    pub state: AppState,
    pub directory: Arc<InMemoryDirectory>,
    pub projections: Arc<InMemoryProjections>,
    pub event_store: Arc<InMemoryEventStore<WorkloadEvent>>,
}

/// No fallback profile: users without a stored profile have unknown capacity.
pub fn make_test_state() -> TestApp {
    let event_store = Arc::new(InMemoryEventStore::<WorkloadEvent>::new());
    let projections = Arc::new(InMemoryProjections::new());
    let directory = Arc::new(InMemoryDirectory::new());
    let state = AppState::in_memory(
        event_store.clone(),
        projections.clone(),
        directory.clone(),
        None,
    );
    TestApp {
        state,
        directory,
        projections,
        event_store,
    }
}

pub fn make_offline_event_store_state() -> AppState {
    let mut event_store = InMemoryEventStore::<WorkloadEvent>::new();
    event_store.toggle_offline();
    AppState::in_memory(
        Arc::new(event_store),
        Arc::new(InMemoryProjections::new()),
        Arc::new(InMemoryDirectory::new()),
        None,
    )
}
