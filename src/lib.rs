pub mod shared {
    pub mod core {
        pub mod primitives;
    }
    pub mod application {
        pub mod errors;
    }
    pub mod infrastructure {
        pub mod document_store;
    }
}

pub mod modules {
    pub mod events {
        pub mod core {
            pub mod event;
            pub mod samples;
        }
        pub mod use_cases {
            pub mod list_events {
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod add_event {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod seed_events {
                pub mod handler;
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod event_repository;
                pub mod event_repository_in_memory;
                #[cfg(feature = "mongodb")]
                pub mod event_repository_mongodb;
            }
        }
    }

    pub mod bookmarks {
        pub mod core {
            pub mod bookmark;
        }
        pub mod use_cases {
            pub mod toggle_bookmark {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
            pub mod list_bookmarked_events {
                pub mod handler;
                pub mod inbound {
                    pub mod graphql;
                    pub mod http;
                }
            }
        }
        pub mod adapters {
            pub mod outbound {
                pub mod bookmark_repository;
                pub mod bookmark_repository_in_memory;
                pub mod bookmark_toggle;
                #[cfg(feature = "mongodb")]
                pub mod bookmark_repository_mongodb;
            }
        }
    }

    pub mod session {
        pub mod core {
            pub mod identity;
        }
        pub mod use_cases {
            pub mod set_user {
                pub mod inbound {
                    pub mod http;
                }
            }
        }
    }
}

pub mod shell;
