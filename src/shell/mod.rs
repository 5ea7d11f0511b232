// Composition root.
//
// Responsibilities
// - Read config from environment.
// - Instantiate the store adapters selected by config.
// - Wire adapters into use case handlers and expose the HTTP router.

pub mod config;
pub mod graphql;
pub mod http;
pub mod state;
pub mod store;
