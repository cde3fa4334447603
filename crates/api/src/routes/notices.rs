//! Route definitions for the `/notices` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::notices;
use crate::state::AppState;

/// Routes mounted at `/notices`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(notices::list).post(notices::create))
        .route("/{id}", put(notices::update).delete(notices::delete))
}
