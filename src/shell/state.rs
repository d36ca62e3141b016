use crate::modules::workload::adapters::outbound::directory_in_memory::InMemoryDirectory;
use crate::modules::workload::adapters::outbound::projections_in_memory::InMemoryProjections;
use crate::modules::workload::core::capacity::CapacityProfile;
use crate::modules::workload::core::events::WorkloadEvent;
use crate::modules::workload::use_cases::daily_workload::handler::DailyWorkloadHandler;
use crate::modules::workload::use_cases::get_assignment_suggestions::handler::GetAssignmentSuggestionsHandler;
use crate::modules::workload::use_cases::get_capacity::handler::{CapacityLookup, GetCapacityHandler};
use crate::modules::workload::use_cases::get_workload_impact::handler::GetWorkloadImpactHandler;
use crate::modules::workload::use_cases::list_workload_entries::handler::Projector;
use crate::modules::workload::use_cases::list_workload_entries::queries_port::WorkloadQueries;
use crate::modules::workload::use_cases::manage_allocation::handler::WorkloadCommandHandler;
use crate::shared::infrastructure::event_store::in_memory::InMemoryEventStore;
use std::sync::Arc;

pub const PROJECTOR_NAME: &str = "workload_entries";

pub type InMemoryCommandHandler = WorkloadCommandHandler<
    InMemoryEventStore<WorkloadEvent>,
    InMemoryProjections,
    InMemoryProjections,
>;

#[derive(Clone)]
pub struct AppState {
    pub queries: Arc<dyn WorkloadQueries>,
    pub command_handler: Arc<InMemoryCommandHandler>,
    pub capacity: Arc<GetCapacityHandler>,
    pub impact: Arc<GetWorkloadImpactHandler>,
    pub suggestions: Arc<GetAssignmentSuggestionsHandler>,
    pub daily: Arc<DailyWorkloadHandler>,
}

impl AppState {
    pub fn in_memory(
        event_store: Arc<InMemoryEventStore<WorkloadEvent>>,
        projections: Arc<InMemoryProjections>,
        directory: Arc<InMemoryDirectory>,
        fallback_profile: Option<CapacityProfile>,
    ) -> Self {
        let projector = Arc::new(Projector::new(
            PROJECTOR_NAME,
            projections.clone(),
            projections.clone(),
        ));
        let lookup = CapacityLookup::new(directory.clone(), fallback_profile);
        Self {
            queries: projections.clone(),
            command_handler: Arc::new(WorkloadCommandHandler::new(event_store, projector)),
            capacity: Arc::new(GetCapacityHandler::new(lookup.clone(), projections.clone())),
            impact: Arc::new(GetWorkloadImpactHandler::new(
                directory.clone(),
                lookup.clone(),
                projections.clone(),
            )),
            suggestions: Arc::new(GetAssignmentSuggestionsHandler::new(
                directory,
                lookup.clone(),
                projections.clone(),
            )),
            daily: Arc::new(DailyWorkloadHandler::new(lookup, projections)),
        }
    }
}
