//! Logging handle injected into services.
//!
//! The process-wide subscriber is installed by the binary; this handle only
//! carries the identity attached to every service log line and hands out
//! request-scoped spans.

use std::sync::Arc;

use tracing::Span;

/// Project id used by [`AppLogger::for_tests`].
pub const TEST_PROJECT_ID: &str = "fake";

/// Explicitly constructed logging handle.
///
/// Cheap to clone. Services keep one and call [`AppLogger::scoped`] per
/// operation, which nests under whatever span is current (normally the HTTP
/// request span carrying the request id).
#[derive(Debug, Clone)]
pub struct AppLogger {
    project_id: Arc<str>,
}

impl AppLogger {
    pub fn new(project_id: impl Into<Arc<str>>) -> Self {
        Self {
            project_id: project_id.into(),
        }
    }

    pub fn for_tests() -> Self {
        Self::new(TEST_PROJECT_ID)
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    /// A span for one service operation, child of the current span.
    pub fn scoped(&self, operation: &'static str) -> Span {
        tracing::debug_span!(
            "dog_service",
            project_id = %self.project_id,
            operation
        )
    }
}
