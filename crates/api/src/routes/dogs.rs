//! Route definitions for the `/dogs` resource.

use axum::routing::{get, post};
use axum::Router;

use crate::handlers::dogs;
use crate::state::AppState;

/// Routes mounted at `/dogs`.
///
/// ```text
/// POST   /            -> create
/// GET    /find        -> find_by_type
/// GET    /{dog_id}    -> get_by_id
/// ```
///
/// `/find` is a static segment and takes priority over `/{dog_id}`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", post(dogs::create))
        .route("/find", get(dogs::find_by_type))
        .route("/{dog_id}", get(dogs::get_by_id))
}
