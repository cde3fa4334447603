//! Route definitions for the `/polls` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::polls;
use crate::state::AppState;

/// Routes mounted at `/polls`.
///
/// ```text
/// GET    /             -> list
/// POST   /             -> create
/// PUT    /{id}         -> update
/// DELETE /{id}         -> delete
/// POST   /{id}/vote    -> vote
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(polls::list).post(polls::create))
        .route("/{id}", put(polls::update).delete(polls::delete))
        .route("/{id}/vote", post(polls::vote))
}
