//! Handlers for `/parking` slots.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use society_core::error::CoreError;
use society_core::records::validate_slot_type;
use society_core::types::DbId;
use society_core::validation::{validate_optional, validate_required};
use society_db::models::parking::{
    CreateParkingSlot, ParkingFilter, ParkingSlot, UpdateParkingSlot,
};
use society_db::repositories::ParkingRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManagement};
use crate::state::AppState;

/// GET /api/parking
#[utoipa::path(
    get,
    path = "/api/parking",
    tag = "parking",
    security(("bearer_auth" = [])),
    params(ParkingFilter),
    responses((status = 200, description = "Parking slots", body = Vec<ParkingSlot>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Query(filter): Query<ParkingFilter>,
) -> AppResult<Json<Vec<ParkingSlot>>> {
    if let Some(slot_type) = &filter.slot_type {
        validate_slot_type(slot_type)?;
    }
    let slots = ParkingRepo::list(&state.pool, &filter).await?;
    Ok(Json(slots))
}

/// POST /api/parking
#[utoipa::path(
    post,
    path = "/api/parking",
    tag = "parking",
    security(("bearer_auth" = [])),
    request_body = CreateParkingSlot,
    responses(
        (status = 201, description = "Slot created", body = ParkingSlot),
        (status = 409, description = "Slot number already exists"),
    )
)]
pub async fn create(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreateParkingSlot>,
) -> AppResult<(StatusCode, Json<ParkingSlot>)> {
    validate_required("slotNumber", &input.slot_number)?;
    validate_slot_type(&input.slot_type)?;
    let slot = ParkingRepo::create(&state.pool, &input).await?;
    tracing::info!(slot_id = slot.id, slot_number = %slot.slot_number, "Parking slot created");
    Ok((StatusCode::CREATED, Json(slot)))
}

/// PUT /api/parking/{id}
#[utoipa::path(
    put,
    path = "/api/parking/{id}",
    tag = "parking",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Slot id")),
    request_body = UpdateParkingSlot,
    responses(
        (status = 200, description = "Slot updated", body = ParkingSlot),
        (status = 404, description = "Slot not found"),
        (status = 409, description = "Slot number already exists"),
    )
)]
pub async fn update(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateParkingSlot>,
) -> AppResult<Json<ParkingSlot>> {
    validate_optional("slotNumber", input.slot_number.as_deref())?;
    if let Some(slot_type) = &input.slot_type {
        validate_slot_type(slot_type)?;
    }
    let slot = ParkingRepo::update(&state.pool, id, &input)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "Parking slot",
            id,
        }))?;
    Ok(Json(slot))
}
