//! Handlers for the `/dogs` resource.

use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::Json;
use kennel_core::dog::{CreateDogRequest, Dog};
use kennel_core::error::CoreError;
use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};
use crate::state::AppState;

/// Body of `POST /dogs`. Missing fields default to empty / zero so that the
/// emptiness check below reports them.
#[derive(Debug, Deserialize)]
pub struct CreateDogBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub age: i64,
    #[serde(default, rename = "type")]
    pub dog_type: String,
}

#[derive(Debug, Serialize)]
pub struct CreateDogResponse {
    pub dog_id: String,
}

#[derive(Debug, Deserialize)]
pub struct FindDogParams {
    #[serde(rename = "type")]
    pub dog_type: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct DogsResponse {
    pub dogs: Vec<Dog>,
}

/// POST /dogs
pub async fn create(
    State(state): State<AppState>,
    body: Result<Json<CreateDogBody>, JsonRejection>,
) -> AppResult<Json<CreateDogResponse>> {
    let Json(body) = body.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Rejected dog request body");
        AppError::BadRequest(rejection.body_text())
    })?;

    if body.name.is_empty() || body.dog_type.is_empty() {
        return Err(CoreError::Validation("name and type are required".into()).into());
    }
    tracing::info!(
        name = %body.name,
        dog_type = %body.dog_type,
        age = body.age,
        "Incoming dog request"
    );

    let dog_id = state
        .dogs
        .create_dog(&CreateDogRequest {
            name: body.name,
            age: body.age,
            dog_type: body.dog_type,
        })
        .await?;
    tracing::info!(%dog_id, "Created dog");

    Ok(Json(CreateDogResponse { dog_id }))
}

/// GET /dogs/{dog_id}
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(dog_id): Path<String>,
) -> AppResult<Json<Dog>> {
    tracing::info!(%dog_id, "Searching for dog");
    let dog = state.dogs.get_dog_by_id(&dog_id).await?;
    tracing::info!(id = %dog.id, "Search found dog");
    Ok(Json(dog))
}

/// GET /dogs/find?type=
///
/// A missing or empty `type` is a 404, matching how the endpoint has always
/// behaved for clients.
pub async fn find_by_type(
    State(state): State<AppState>,
    Query(params): Query<FindDogParams>,
) -> AppResult<Json<DogsResponse>> {
    let dog_type = params.dog_type.unwrap_or_default();
    tracing::info!(%dog_type, "Searching for dog type");
    if dog_type.is_empty() {
        return Err(AppError::NotFound("type query parameter is required".into()));
    }

    let dogs = state.dogs.find_dog_by_type(&dog_type).await?;
    tracing::info!(count = dogs.len(), %dog_type, "Found dogs");
    Ok(Json(DogsResponse { dogs }))
}
