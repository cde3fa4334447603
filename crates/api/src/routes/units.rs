//! Route definitions for `/units` and their household records.

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::{household, units};
use crate::state::AppState;

/// Routes mounted at `/units`.
///
/// ```text
/// GET    /                          -> list
/// POST   /                          -> create
/// GET    /{id}                      -> get_by_id
/// PUT    /{id}                      -> update
/// DELETE /{id}                      -> delete
///
/// POST   /{id}/family               -> add_family_member
/// PUT    /{id}/family/{index}       -> update_family_member
/// DELETE /{id}/family/{index}       -> remove_family_member
/// POST   /{id}/vehicles             -> add_vehicle
/// PUT    /{id}/vehicles/{index}     -> update_vehicle
/// DELETE /{id}/vehicles/{index}     -> remove_vehicle
/// POST   /{id}/pets                 -> add_pet
/// DELETE /{id}/pets/{index}         -> remove_pet
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(units::list).post(units::create))
        .route(
            "/{id}",
            get(units::get_by_id)
                .put(units::update)
                .delete(units::delete),
        )
        .route("/{id}/family", post(household::add_family_member))
        .route(
            "/{id}/family/{index}",
            put(household::update_family_member).delete(household::remove_family_member),
        )
        .route("/{id}/vehicles", post(household::add_vehicle))
        .route(
            "/{id}/vehicles/{index}",
            put(household::update_vehicle).delete(household::remove_vehicle),
        )
        .route("/{id}/pets", post(household::add_pet))
        .route("/{id}/pets/{index}", delete(household::remove_pet))
}
