//! Route definitions for `/facilities` and bookings.

use axum::routing::{get, put};
use axum::Router;

use crate::handlers::facilities;
use crate::state::AppState;

/// Routes mounted at `/facilities`.
///
/// ```text
/// GET    /                  -> list
/// POST   /                  -> create
/// PUT    /{id}              -> update
/// DELETE /{id}              -> delete
/// GET    /bookings          -> list_bookings
/// POST   /bookings          -> create_booking
/// PUT    /bookings/{id}     -> update_booking
/// DELETE /bookings/{id}     -> delete_booking
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(facilities::list).post(facilities::create))
        .route(
            "/bookings",
            get(facilities::list_bookings).post(facilities::create_booking),
        )
        .route(
            "/bookings/{id}",
            put(facilities::update_booking).delete(facilities::delete_booking),
        )
        .route("/{id}", put(facilities::update).delete(facilities::delete))
}
