use axum::routing::{get, put};
use axum::Router;

use crate::handlers::parking;
use crate::state::AppState;

/// Routes mounted at `/parking`.
///
/// ```text
/// GET  /        -> list (?type=resident|visitor)
/// POST /        -> create
/// PUT  /{id}    -> update
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(parking::list).post(parking::create))
        .route("/{id}", put(parking::update))
}
