pub mod shared {
    pub mod core {
        pub mod calendar_day;
    }
    pub mod infrastructure {
        pub mod event_store;
    }
}

pub mod modules {
    pub mod workload {
        pub mod core {
            pub mod bucketing;
            pub mod capacity;
            pub mod distribution;
            pub mod entry;
            pub mod events;
            pub mod evolve;
            pub mod impact;
            pub mod ports;
            pub mod projections;
            pub mod state;
            pub mod suggestions;
            pub mod validation;
        }
        pub mod use_cases {
            pub mod errors;
            pub mod manage_allocation {
                pub mod command;
                pub mod decide;
                pub mod decision;
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_workload_entries {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
                pub mod projection;
                pub mod queries_port;
            }
            pub mod get_capacity {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_workload_impact {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod get_assignment_suggestions {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod daily_workload {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod plan_distribution {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod directory_in_memory;
                pub mod projections;
                pub mod projections_in_memory;
            }
        }
    }
}

pub mod shell;
