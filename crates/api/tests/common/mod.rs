#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use kennel_core::dog::{Dog, NewDog};
use kennel_core::store::{DogStore, MemoryDogStore, StoreError};
use kennel_core::telemetry::AppLogger;
use kennel_core::types::Timestamp;
use tower::ServiceExt;

use kennel_api::config::{AppEnv, ServerConfig, StoreBackend};
use kennel_api::router::build_app_router;
use kennel_api::state::AppState;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        env: AppEnv::Development,
        host: "127.0.0.1".to_string(),
        port: 0,
        project_id: "fake".to_string(),
        store_backend: StoreBackend::Memory,
        database_url: None,
        database_max_connections: 1,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        shutdown_timeout_secs: 9,
    }
}

/// Build the full application router over the given store.
pub fn build_test_app(store: Arc<dyn DogStore>) -> Router {
    build_test_app_with_config(store, test_config())
}

/// Same as [`build_test_app`] with a caller-supplied configuration.
pub fn build_test_app_with_config(store: Arc<dyn DogStore>, config: ServerConfig) -> Router {
    let state = AppState::new(store, AppLogger::for_tests(), config);
    build_app_router(state)
}

/// Router over a fresh in-memory store, plus the store for seeding and
/// inspection.
pub fn memory_app() -> (Router, Arc<MemoryDogStore>) {
    let store = Arc::new(MemoryDogStore::new());
    let app = build_test_app(Arc::clone(&store) as Arc<dyn DogStore>);
    (app, store)
}

/// Store whose every call fails, for exercising the 500 paths.
pub struct BrokenStore;

#[async_trait]
impl DogStore for BrokenStore {
    async fn get(&self, _id: &str) -> Result<Option<Dog>, StoreError> {
        Err(StoreError::backend("connection refused to 10.0.0.7:5432"))
    }
    async fn create(&self, _dog: &NewDog) -> Result<Timestamp, StoreError> {
        Err(StoreError::backend("connection refused to 10.0.0.7:5432"))
    }
    async fn find_by_type(&self, _dog_type: &str) -> Result<Vec<Dog>, StoreError> {
        Err(StoreError::backend("connection refused to 10.0.0.7:5432"))
    }
    async fn health_check(&self) -> Result<(), StoreError> {
        Err(StoreError::backend("connection refused to 10.0.0.7:5432"))
    }
}

/// Store whose calls never complete. Counts in-flight calls that were
/// dropped before finishing.
#[derive(Default)]
pub struct StalledStore {
    pub dropped: Arc<AtomicUsize>,
}

struct DropCounter(Arc<AtomicUsize>);

impl Drop for DropCounter {
    fn drop(&mut self) {
        self.0.fetch_add(1, Ordering::SeqCst);
    }
}

#[async_trait]
impl DogStore for StalledStore {
    async fn get(&self, _id: &str) -> Result<Option<Dog>, StoreError> {
        let _guard = DropCounter(Arc::clone(&self.dropped));
        std::future::pending().await
    }
    async fn create(&self, _dog: &NewDog) -> Result<Timestamp, StoreError> {
        let _guard = DropCounter(Arc::clone(&self.dropped));
        std::future::pending().await
    }
    async fn find_by_type(&self, _dog_type: &str) -> Result<Vec<Dog>, StoreError> {
        let _guard = DropCounter(Arc::clone(&self.dropped));
        std::future::pending().await
    }
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    post_raw(app, uri, "application/json", body.to_string()).await
}

pub async fn post_raw(
    app: Router,
    uri: &str,
    content_type: &str,
    body: impl Into<String>,
) -> Response<Body> {
    let request = Request::builder()
        .method(Method::POST)
        .uri(uri)
        .header("content-type", content_type)
        .body(Body::from(body.into()))
        .unwrap();
    app.oneshot(request).await.unwrap()
}

pub async fn body_text(response: Response<Body>) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    serde_json::from_str(&body_text(response).await).unwrap()
}
