//! Route definitions for the `/visitors` resource.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::visitors;
use crate::state::AppState;

/// Routes mounted at `/visitors`.
///
/// ```text
/// GET    /                 -> list (?active=true)
/// POST   /checkin          -> check_in
/// PUT    /{id}             -> update
/// DELETE /{id}             -> delete
/// PUT    /{id}/checkout    -> check_out
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(visitors::list))
        .route("/checkin", post(visitors::check_in))
        .route("/{id}", put(visitors::update).delete(visitors::delete))
        .route("/{id}/checkout", put(visitors::check_out))
}
