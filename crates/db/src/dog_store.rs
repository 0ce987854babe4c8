//! [`DogStore`] over the `dogs` table.

use async_trait::async_trait;
use kennel_core::dog::{Dog, NewDog};
use kennel_core::store::{DogStore, StoreError};
use kennel_core::types::{dog_path, Timestamp, DOG_COLLECTION};
use sqlx::FromRow;

use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, name, age, type, created_timestamp";

/// PostgreSQL unique violation.
const UNIQUE_VIOLATION: &str = "23505";

/// A row from the `dogs` table.
#[derive(Debug, FromRow)]
struct DogRow {
    id: String,
    name: String,
    age: i64,
    #[sqlx(rename = "type")]
    dog_type: String,
    created_timestamp: Timestamp,
}

impl From<DogRow> for Dog {
    fn from(row: DogRow) -> Self {
        Dog {
            name: row.name,
            age: row.age,
            dog_type: row.dog_type,
            id: row.id,
            created_timestamp: row.created_timestamp,
        }
    }
}

/// Dog store backed by a shared [`DbPool`].
#[derive(Debug, Clone)]
pub struct PgDogStore {
    pool: DbPool,
}

impl PgDogStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

/// Map a sqlx error into the store vocabulary.
///
/// Row decoding problems become [`StoreError::Malformed`]; everything else is
/// a backend failure.
fn classify(err: sqlx::Error, path: &str) -> StoreError {
    match err {
        sqlx::Error::ColumnDecode { .. }
        | sqlx::Error::Decode(_)
        | sqlx::Error::ColumnNotFound(_) => StoreError::Malformed {
            path: path.to_string(),
            reason: err.to_string(),
        },
        other => StoreError::backend(other),
    }
}

#[async_trait]
impl DogStore for PgDogStore {
    async fn get(&self, id: &str) -> Result<Option<Dog>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE id = $1");
        let row = sqlx::query_as::<_, DogRow>(&query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| classify(e, &dog_path(id)))?;
        Ok(row.map(Dog::from))
    }

    async fn create(&self, dog: &NewDog) -> Result<Timestamp, StoreError> {
        let result = sqlx::query_scalar::<_, Timestamp>(
            "INSERT INTO dogs (id, name, age, type)
             VALUES ($1, $2, $3, $4)
             RETURNING created_timestamp",
        )
        .bind(&dog.id)
        .bind(&dog.name)
        .bind(dog.age)
        .bind(&dog.dog_type)
        .fetch_one(&self.pool)
        .await;

        match result {
            Ok(created_timestamp) => Ok(created_timestamp),
            Err(sqlx::Error::Database(db_err))
                if db_err.code().as_deref() == Some(UNIQUE_VIOLATION) =>
            {
                tracing::warn!(id = %dog.id, "Generated dog id collided with an existing row");
                Err(StoreError::AlreadyExists {
                    collection: DOG_COLLECTION,
                    id: dog.id.clone(),
                })
            }
            Err(err) => Err(classify(err, &dog_path(&dog.id))),
        }
    }

    async fn find_by_type(&self, dog_type: &str) -> Result<Vec<Dog>, StoreError> {
        let query = format!("SELECT {COLUMNS} FROM dogs WHERE type = $1");
        let rows = sqlx::query_as::<_, DogRow>(&query)
            .bind(dog_type)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| classify(e, DOG_COLLECTION))?;
        Ok(rows.into_iter().map(Dog::from).collect())
    }

    async fn health_check(&self) -> Result<(), StoreError> {
        crate::health_check(&self.pool)
            .await
            .map_err(StoreError::backend)
    }
}
