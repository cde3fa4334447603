//! Route definitions for `/users`, including the nested staff register.

use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{staff, users};
use crate::state::AppState;

/// Routes mounted at `/users`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
///
/// POST   /staff                     -> staff::create
/// GET    /staff/all                 -> staff::list
/// PUT    /staff/{id}                -> staff::update
/// DELETE /staff/{id}                -> staff::delete
/// POST   /staff/{id}/attendance     -> staff::record
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(users::list).post(users::create))
        .nest("/staff", staff_router())
        .route(
            "/{id}",
            get(users::get_by_id)
                .put(users::update)
                .delete(users::delete),
        )
}

fn staff_router() -> Router<AppState> {
    Router::new()
        .route("/", post(staff::create))
        .route("/all", get(staff::list))
        .route("/{id}", put(staff::update).delete(staff::delete))
        .route("/{id}/attendance", post(staff::record))
}
