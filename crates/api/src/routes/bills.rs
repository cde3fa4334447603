//! Route definitions for the `/bills` resource.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::bills;
use crate::state::AppState;

/// Routes mounted at `/bills`.
///
/// ```text
/// GET    /            -> list (?status, ?unitId)
/// POST   /            -> create
/// GET    /my          -> my
/// GET    /summary     -> summary
/// PUT    /{id}        -> update
/// DELETE /{id}        -> delete
/// PUT    /{id}/pay    -> pay
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(bills::list).post(bills::create))
        .route("/my", get(bills::my))
        .route("/summary", get(bills::summary))
        .route("/{id}", put(bills::update).delete(bills::delete))
        .route("/{id}/pay", put(bills::pay))
}
