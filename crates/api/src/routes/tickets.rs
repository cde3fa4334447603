//! Route definitions for the `/tickets` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::tickets;
use crate::state::AppState;

/// Routes mounted at `/tickets`.
///
/// ```text
/// GET  /          -> list (?status, ?unitId, ?assignedToId)
/// POST /          -> create
/// GET  /my        -> my
/// GET  /{id}      -> get_by_id
/// PUT  /{id}      -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(tickets::list).post(tickets::create))
        .route("/my", get(tickets::my))
        .route("/{id}", get(tickets::get_by_id).put(tickets::update))
}
