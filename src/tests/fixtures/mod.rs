pub mod commands {
    pub mod allocate_workload;
}
pub mod entries;
pub mod events {
    pub mod workload_allocated_v1;
}
pub mod state;
pub mod tasks;
