//! Handlers for `/facilities` and their bookings.
//!
//! Booking writes go through [`BookingRepo`], which locks the facility row
//! before reading the day's active slots. Overlap checks therefore see every
//! committed booking for that facility.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use society_core::error::CoreError;
use society_core::facility::{
    ensure_slot_free, validate_booking_transition, validate_facility, validate_time_window,
    ACTIVE_BOOKING_STATUSES,
};
use society_core::types::DbId;
use society_core::validation::validate_required;
use society_db::models::facility::{
    BookingDetail, CreateBooking, CreateFacility, Facility, FacilityBooking, UpdateBooking,
    UpdateFacility,
};
use society_db::repositories::{BookingRepo, FacilityRepo};

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManagement};
use crate::state::AppState;

fn facility_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Facility", id })
}

fn booking_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Booking", id })
}

/* --------------------------------------------------------------------------
Facilities
-------------------------------------------------------------------------- */

/// GET /api/facilities
#[utoipa::path(
    get,
    path = "/api/facilities",
    tag = "facilities",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All facilities", body = Vec<Facility>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Facility>>> {
    let facilities = FacilityRepo::list(&state.pool).await?;
    Ok(Json(facilities))
}

/// POST /api/facilities
#[utoipa::path(
    post,
    path = "/api/facilities",
    tag = "facilities",
    security(("bearer_auth" = [])),
    request_body = CreateFacility,
    responses(
        (status = 201, description = "Facility created", body = Facility),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn create(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreateFacility>,
) -> AppResult<(StatusCode, Json<Facility>)> {
    validate_facility(&input.name, input.capacity, input.is_paid, input.price_per_hour)?;
    validate_required("description", &input.description)?;
    validate_required("timings", &input.timings)?;

    let facility = FacilityRepo::create(&state.pool, &input).await?;
    tracing::info!(facility_id = facility.id, name = %facility.name, "Facility created");
    Ok((StatusCode::CREATED, Json(facility)))
}

/// PUT /api/facilities/{id}
///
/// Pricing rules are checked against the merged result, so turning a free
/// facility into a paid one requires a price in the same request (or one
/// already stored).
#[utoipa::path(
    put,
    path = "/api/facilities/{id}",
    tag = "facilities",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Facility id")),
    request_body = UpdateFacility,
    responses(
        (status = 200, description = "Facility updated", body = Facility),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Facility not found"),
    )
)]
pub async fn update(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateFacility>,
) -> AppResult<Json<Facility>> {
    let current = FacilityRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| facility_not_found(id))?;

    validate_facility(
        input.name.as_deref().unwrap_or(&current.name),
        input.capacity.unwrap_or(current.capacity),
        input.is_paid.unwrap_or(current.is_paid),
        input.price_per_hour.or(current.price_per_hour),
    )?;

    let facility = FacilityRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| facility_not_found(id))?;
    Ok(Json(facility))
}

/// DELETE /api/facilities/{id}
///
/// Bookings of the facility are removed with it.
#[utoipa::path(
    delete,
    path = "/api/facilities/{id}",
    tag = "facilities",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Facility id")),
    responses(
        (status = 204, description = "Facility deleted"),
        (status = 404, description = "Facility not found"),
    )
)]
pub async fn delete(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if FacilityRepo::delete(&state.pool, id).await? {
        tracing::info!(facility_id = id, "Facility deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(facility_not_found(id))
    }
}

/* --------------------------------------------------------------------------
Bookings
-------------------------------------------------------------------------- */

/// GET /api/facilities/bookings
#[utoipa::path(
    get,
    path = "/api/facilities/bookings",
    tag = "facilities",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Bookings, latest date first", body = Vec<BookingDetail>))
)]
pub async fn list_bookings(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<BookingDetail>>> {
    let bookings = BookingRepo::list(&state.pool).await?;
    tracing::debug!(count = bookings.len(), "Listed bookings");
    Ok(Json(bookings))
}

/// POST /api/facilities/bookings
#[utoipa::path(
    post,
    path = "/api/facilities/bookings",
    tag = "facilities",
    security(("bearer_auth" = [])),
    request_body = CreateBooking,
    responses(
        (status = 201, description = "Booking requested", body = FacilityBooking),
        (status = 400, description = "Invalid time window"),
        (status = 404, description = "Facility not found"),
        (status = 409, description = "Slot overlaps an active booking"),
    )
)]
pub async fn create_booking(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CreateBooking>,
) -> AppResult<(StatusCode, Json<FacilityBooking>)> {
    validate_time_window(input.start_time, input.end_time)?;

    let booking = BookingRepo::create(&state.pool, user.user_id, &input, |slots| -> AppResult<()> {
        ensure_slot_free(input.start_time, input.end_time, slots.iter().copied())?;
        Ok(())
    })
    .await?
    .ok_or_else(|| facility_not_found(input.facility_id))?;

    tracing::info!(
        booking_id = booking.id,
        facility_id = booking.facility_id,
        user_id = user.user_id,
        date = %booking.date,
        "Facility booked"
    );
    Ok((StatusCode::CREATED, Json(booking)))
}

/// PUT /api/facilities/bookings/{id}
#[utoipa::path(
    put,
    path = "/api/facilities/bookings/{id}",
    tag = "facilities",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Booking id")),
    request_body = UpdateBooking,
    responses(
        (status = 200, description = "Booking updated", body = FacilityBooking),
        (status = 400, description = "Invalid status change or time window"),
        (status = 404, description = "Booking not found"),
        (status = 409, description = "Slot overlaps an active booking"),
    )
)]
pub async fn update_booking(
    RequireManagement(user): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateBooking>,
) -> AppResult<Json<FacilityBooking>> {
    let booking = BookingRepo::update(&state.pool, id, &input, |current, slots| -> AppResult<()> {
        let status = input.status.as_deref().unwrap_or(&current.status);
        validate_booking_transition(&current.status, status)?;

        let start = input.start_time.unwrap_or(current.start_time);
        let end = input.end_time.unwrap_or(current.end_time);
        validate_time_window(start, end)?;

        if ACTIVE_BOOKING_STATUSES.iter().any(|s| *s == status) {
            ensure_slot_free(start, end, slots.iter().copied())?;
        }
        Ok(())
    })
    .await?
    .ok_or_else(|| booking_not_found(id))?;

    tracing::info!(
        booking_id = id,
        status = %booking.status,
        decided_by = user.user_id,
        "Booking updated"
    );
    Ok(Json(booking))
}

/// DELETE /api/facilities/bookings/{id}
#[utoipa::path(
    delete,
    path = "/api/facilities/bookings/{id}",
    tag = "facilities",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Booking id")),
    responses(
        (status = 204, description = "Booking deleted"),
        (status = 404, description = "Booking not found"),
    )
)]
pub async fn delete_booking(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if BookingRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(booking_not_found(id))
    }
}
