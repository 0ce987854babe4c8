use std::sync::Arc;

use kennel_core::service::DogService;
use kennel_core::store::DogStore;
use kennel_core::telemetry::AppLogger;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Record service used by the `/dogs` handlers.
    pub dogs: DogService,
    /// The store behind `dogs`, for health checks.
    pub store: Arc<dyn DogStore>,
    pub config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(store: Arc<dyn DogStore>, logger: AppLogger, config: ServerConfig) -> Self {
        Self {
            dogs: DogService::new(Arc::clone(&store), logger),
            store,
            config: Arc::new(config),
        }
    }
}
