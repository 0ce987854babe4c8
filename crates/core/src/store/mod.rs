//! The seam between the record service and the document store.

pub mod memory;

use async_trait::async_trait;

use crate::dog::{Dog, NewDog};
use crate::ids::generate_document_id;
use crate::types::Timestamp;

pub use memory::MemoryDogStore;

/// Boxed error from a store backend.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Failures reported by a [`DogStore`].
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Create-if-absent hit an existing document.
    #[error("document {collection}/{id} already exists")]
    AlreadyExists { collection: &'static str, id: String },

    /// A stored document could not be decoded into a dog.
    #[error("malformed document {path}: {reason}")]
    Malformed { path: String, reason: String },

    /// Connectivity, quota, driver and every other backend failure.
    #[error("store backend error: {0}")]
    Backend(#[source] BoxError),
}

impl StoreError {
    pub fn backend(err: impl Into<BoxError>) -> Self {
        StoreError::Backend(err.into())
    }
}

/// Document store holding dog records.
///
/// Implementations must be safe to share across concurrent requests; the
/// service holds one behind an `Arc` and never locks around it.
#[async_trait]
pub trait DogStore: Send + Sync + 'static {
    /// Generate a fresh, globally unique document id.
    fn new_id(&self) -> String {
        generate_document_id()
    }

    /// Fetch the document at `dogs/{id}`. Returns `None` if it does not exist.
    async fn get(&self, id: &str) -> Result<Option<Dog>, StoreError>;

    /// Write a new document, failing with [`StoreError::AlreadyExists`]
    /// rather than overwriting. Returns the server-stamped creation time.
    async fn create(&self, dog: &NewDog) -> Result<Timestamp, StoreError>;

    /// All documents whose `type` equals `dog_type` exactly.
    async fn find_by_type(&self, dog_type: &str) -> Result<Vec<Dog>, StoreError>;

    /// Cheap round trip proving the store is reachable.
    async fn health_check(&self) -> Result<(), StoreError>;
}
