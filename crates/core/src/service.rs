//! Record service over dog documents.
//!
//! Each operation is exactly one store round trip. No retries, no caching,
//! no validation: the request layer rejects bad input before calling in.

use std::sync::Arc;

use tracing::Instrument;

use crate::dog::{CreateDogRequest, Dog, NewDog};
use crate::error::CoreError;
use crate::store::DogStore;
use crate::telemetry::AppLogger;
use crate::types::{dog_path, DOG_COLLECTION};

/// Create/read/find operations over dog records.
///
/// Stateless apart from the shared store handle and logger, so one instance
/// serves every concurrent request.
#[derive(Clone)]
pub struct DogService {
    store: Arc<dyn DogStore>,
    logger: AppLogger,
}

impl DogService {
    pub fn new(store: Arc<dyn DogStore>, logger: AppLogger) -> Self {
        Self { store, logger }
    }

    /// Persist a new dog under a freshly generated id and return that id.
    pub async fn create_dog(&self, request: &CreateDogRequest) -> Result<String, CoreError> {
        let span = self.logger.scoped("create_dog");
        async move {
            let id = self.store.new_id();
            tracing::debug!(collection = DOG_COLLECTION, id = %id, "Creating store document");

            let new_dog = NewDog::from_request(id, request);
            let created_at = self
                .store
                .create(&new_dog)
                .await
                .map_err(CoreError::store("create_dog", dog_path(&new_dog.id)))?;

            tracing::debug!(id = %new_dog.id, %created_at, "Store document created");
            Ok(new_dog.id)
        }
        .instrument(span)
        .await
    }

    /// Fetch one dog by id.
    ///
    /// Fails with [`CoreError::DogNotFound`] if no document exists at that id.
    pub async fn get_dog_by_id(&self, id: &str) -> Result<Dog, CoreError> {
        let span = self.logger.scoped("get_dog_by_id");
        async move {
            let path = dog_path(id);
            tracing::debug!(path = %path, "Searching store");

            self.store
                .get(id)
                .await
                .map_err(CoreError::store("get_dog_by_id", path))?
                .ok_or_else(|| CoreError::DogNotFound { id: id.to_string() })
        }
        .instrument(span)
        .await
    }

    /// All dogs whose type matches `dog_type` exactly. No matches is an
    /// empty vec, not an error.
    pub async fn find_dog_by_type(&self, dog_type: &str) -> Result<Vec<Dog>, CoreError> {
        let span = self.logger.scoped("find_dog_by_type");
        async move {
            tracing::debug!(collection = DOG_COLLECTION, dog_type, "Searching store");

            self.store
                .find_by_type(dog_type)
                .await
                .map_err(CoreError::store("find_dog_by_type", dog_type))
        }
        .instrument(span)
        .await
    }
}
