//! LingDB HTTP service.
//!
//! Publishes declared enumerations and the glossing abbreviation table over
//! HTTP. Every document is produced by an adapter (see [`adapter`]), selected
//! by the `format` query parameter.

pub mod adapter;
pub mod config;
pub mod error;
pub mod json;
pub mod registry;
pub mod routes;
pub mod vocabulary;

pub use config::{Args, WebConfig};
pub use error::AppError;
pub use registry::{EnumerationRegistry, EnumerationView, SymbolEntry};

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

/// Application state shared across all routes.
#[derive(Clone)]
pub struct AppState {
    /// Published enumerations.
    pub registry: Arc<EnumerationRegistry>,
    /// Service configuration.
    pub config: WebConfig,
}

impl AppState {
    /// Create new application state.
    pub fn new(registry: EnumerationRegistry, config: WebConfig) -> Self {
        Self {
            registry: Arc::new(registry),
            config,
        }
    }
}

/// Create the router with all routes.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .merge(routes::health::routes())
        .merge(routes::enumerations::routes())
        .merge(routes::glossing::routes())
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
