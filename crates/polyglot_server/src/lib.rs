//! HTTP backend: validates translation requests and fans them out.
pub mod config;
mod handlers;
mod routes;
mod types;

pub use config::{ConfigError, ServerConfig};
pub use routes::create_routes;
pub use types::{ErrorBody, HealthResponse, ServerState};
