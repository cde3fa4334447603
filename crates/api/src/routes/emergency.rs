//! Route definitions for the `/emergency` contact list.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::emergency;
use crate::state::AppState;

/// Routes mounted at `/emergency`.
///
/// ```text
/// GET    /        -> list
/// POST   /        -> create
/// PUT    /{id}    -> update
/// DELETE /{id}    -> delete
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(emergency::list).post(emergency::create))
        .route("/{id}", put(emergency::update).delete(emergency::delete))
}
