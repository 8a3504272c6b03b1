// Crate entry point. Re-export modules so tests and binaries can import them easily.
//
// Responsibilities
// - Only declare and expose modules. No business logic here.

pub mod modules {
    pub mod projects {
        pub mod core {
            pub mod project;
            pub mod validation;
        }
        pub mod service;
        pub mod use_cases {
            pub mod list_projects {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod create_project {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod get_project {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod update_project {
                pub mod inbound {
                    pub mod http;
                }
            }
            pub mod delete_project {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod inbound {
                pub mod http_response;
            }
            pub mod outbound {
                pub mod project_store;
                pub mod project_store_in_memory;
                pub mod project_store_mongo;
            }
        }
    }
    pub mod theme {
        pub mod core {
            pub mod mode;
            pub mod palette;
            pub mod state;
        }
        pub mod inbound {
            pub mod http;
        }
    }
}

pub mod shell;
