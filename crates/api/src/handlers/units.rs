//! Handlers for the `/units` resource.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use society_core::error::CoreError;
use society_core::household::HouseholdEntry;
use society_core::types::DbId;
use society_core::validation::{validate_optional, validate_required};
use society_db::models::unit::{CreateUnit, Unit, UnitDetail, UpdateUnit};
use society_db::repositories::UnitRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManagement};
use crate::state::AppState;

pub(crate) fn unit_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Unit", id })
}

/// GET /api/units
#[utoipa::path(
    get,
    path = "/api/units",
    tag = "units",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All units with owner and tenant", body = Vec<UnitDetail>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UnitDetail>>> {
    let units = UnitRepo::list(&state.pool).await?;
    tracing::debug!(count = units.len(), "Listed units");
    Ok(Json(units))
}

/// GET /api/units/{id}
#[utoipa::path(
    get,
    path = "/api/units/{id}",
    tag = "units",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Unit id")),
    responses(
        (status = 200, description = "Unit found", body = UnitDetail),
        (status = 404, description = "Unit not found"),
    )
)]
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UnitDetail>> {
    let unit = UnitRepo::find_detail(&state.pool, id)
        .await?
        .ok_or_else(|| unit_not_found(id))?;
    Ok(Json(unit))
}

/// POST /api/units
#[utoipa::path(
    post,
    path = "/api/units",
    tag = "units",
    security(("bearer_auth" = [])),
    request_body = CreateUnit,
    responses(
        (status = 201, description = "Unit created", body = Unit),
        (status = 409, description = "Unit number already exists"),
    )
)]
pub async fn create(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreateUnit>,
) -> AppResult<(StatusCode, Json<Unit>)> {
    validate_required("number", &input.number)?;
    validate_required("block", &input.block)?;
    validate_required("type", &input.unit_type)?;
    for member in &input.family_members {
        member.validate()?;
    }
    for vehicle in &input.vehicles {
        vehicle.validate()?;
    }
    for pet in &input.pets {
        pet.validate()?;
    }

    let unit = UnitRepo::create(&state.pool, &input).await?;
    tracing::info!(unit_id = unit.id, number = %unit.number, "Unit created");
    Ok((StatusCode::CREATED, Json(unit)))
}

/// PUT /api/units/{id}
#[utoipa::path(
    put,
    path = "/api/units/{id}",
    tag = "units",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Unit id")),
    request_body = UpdateUnit,
    responses(
        (status = 200, description = "Unit updated", body = Unit),
        (status = 404, description = "Unit not found"),
        (status = 409, description = "Unit number already exists"),
    )
)]
pub async fn update(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUnit>,
) -> AppResult<Json<Unit>> {
    validate_optional("number", input.number.as_deref())?;
    validate_optional("block", input.block.as_deref())?;
    validate_optional("type", input.unit_type.as_deref())?;
    let unit = UnitRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| unit_not_found(id))?;
    Ok(Json(unit))
}

/// DELETE /api/units/{id}
#[utoipa::path(
    delete,
    path = "/api/units/{id}",
    tag = "units",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Unit id")),
    responses(
        (status = 204, description = "Unit deleted"),
        (status = 404, description = "Unit not found"),
    )
)]
pub async fn delete(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if UnitRepo::delete(&state.pool, id).await? {
        tracing::info!(unit_id = id, "Unit deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(unit_not_found(id))
    }
}
