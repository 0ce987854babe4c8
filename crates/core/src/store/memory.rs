//! In-process [`DogStore`] backed by a `HashMap`.

use std::collections::hash_map::Entry;
use std::collections::HashMap;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use super::{DogStore, StoreError};
use crate::dog::{Dog, NewDog};
use crate::types::{Timestamp, DOG_COLLECTION};

/// Volatile store for local runs and tests. Contents are lost on drop.
#[derive(Debug, Default)]
pub struct MemoryDogStore {
    dogs: RwLock<HashMap<String, Dog>>,
}

impl MemoryDogStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored documents.
    pub async fn len(&self) -> usize {
        self.dogs.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.dogs.read().await.is_empty()
    }
}

#[async_trait]
impl DogStore for MemoryDogStore {
    async fn get(&self, id: &str) -> Result<Option<Dog>, StoreError> {
        Ok(self.dogs.read().await.get(id).cloned())
    }

    async fn create(&self, dog: &NewDog) -> Result<Timestamp, StoreError> {
        let mut dogs = self.dogs.write().await;
        match dogs.entry(dog.id.clone()) {
            Entry::Occupied(_) => Err(StoreError::AlreadyExists {
                collection: DOG_COLLECTION,
                id: dog.id.clone(),
            }),
            Entry::Vacant(slot) => {
                let created_timestamp = Utc::now();
                slot.insert(dog.clone().into_dog(created_timestamp));
                Ok(created_timestamp)
            }
        }
    }

    async fn find_by_type(&self, dog_type: &str) -> Result<Vec<Dog>, StoreError> {
        Ok(self
            .dogs
            .read()
            .await
            .values()
            .filter(|dog| dog.dog_type == dog_type)
            .cloned()
            .collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }
}
