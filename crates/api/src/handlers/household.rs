//! Handlers for a unit's family members, vehicles and pets.
//!
//! Entries are addressed by list position. Every mutation runs through
//! [`UnitRepo::modify_household`], which holds the unit row lock while the
//! list is edited, and returns the whole unit.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use society_core::household::{
    add_entry, remove_entry, update_entry, FamilyMember, FamilyMemberPatch, Pet, Vehicle,
    VehiclePatch,
};
use society_core::types::DbId;
use society_db::models::unit::Unit;
use society_db::repositories::UnitRepo;

use super::units::unit_not_found;
use crate::error::AppResult;
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

/// Run `edit` against the locked unit and map a missing unit to 404.
async fn edit_unit<F>(state: &AppState, id: DbId, edit: F) -> AppResult<Unit>
where
    F: FnOnce(&mut Unit) -> AppResult<()>,
{
    UnitRepo::modify_household(&state.pool, id, edit)
        .await?
        .ok_or_else(|| unit_not_found(id))
}

/* --------------------------------------------------------------------------
Family members
-------------------------------------------------------------------------- */

/// POST /api/units/{id}/family
#[utoipa::path(
    post,
    path = "/api/units/{id}/family",
    tag = "units",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Unit id")),
    request_body = FamilyMember,
    responses(
        (status = 201, description = "Family member added", body = Unit),
        (status = 404, description = "Unit not found"),
    )
)]
pub async fn add_family_member(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(member): Json<FamilyMember>,
) -> AppResult<(StatusCode, Json<Unit>)> {
    let unit = edit_unit(&state, id, |u| {
        add_entry(&mut u.family_members.0, member)?;
        Ok(())
    })
    .await?;
    tracing::info!(unit_id = id, user_id = user.user_id, "Family member added");
    Ok((StatusCode::CREATED, Json(unit)))
}

/// PUT /api/units/{id}/family/{index}
#[utoipa::path(
    put,
    path = "/api/units/{id}/family/{index}",
    tag = "units",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Unit id"),
        ("index" = i64, Path, description = "Position in the family list"),
    ),
    request_body = FamilyMemberPatch,
    responses(
        (status = 200, description = "Family member updated", body = Unit),
        (status = 404, description = "Unit or family member not found"),
    )
)]
pub async fn update_family_member(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path((id, index)): Path<(DbId, i64)>,
    Json(patch): Json<FamilyMemberPatch>,
) -> AppResult<Json<Unit>> {
    let unit = edit_unit(&state, id, |u| {
        update_entry(&mut u.family_members.0, index, patch)?;
        Ok(())
    })
    .await?;
    Ok(Json(unit))
}

/// DELETE /api/units/{id}/family/{index}
#[utoipa::path(
    delete,
    path = "/api/units/{id}/family/{index}",
    tag = "units",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Unit id"),
        ("index" = i64, Path, description = "Position in the family list"),
    ),
    responses(
        (status = 200, description = "Family member removed", body = Unit),
        (status = 404, description = "Unit or family member not found"),
    )
)]
pub async fn remove_family_member(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path((id, index)): Path<(DbId, i64)>,
) -> AppResult<Json<Unit>> {
    let unit = edit_unit(&state, id, |u| {
        remove_entry(&mut u.family_members.0, index)?;
        Ok(())
    })
    .await?;
    Ok(Json(unit))
}

/* --------------------------------------------------------------------------
Vehicles
-------------------------------------------------------------------------- */

/// POST /api/units/{id}/vehicles
#[utoipa::path(
    post,
    path = "/api/units/{id}/vehicles",
    tag = "units",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Unit id")),
    request_body = Vehicle,
    responses(
        (status = 201, description = "Vehicle added", body = Unit),
        (status = 404, description = "Unit not found"),
    )
)]
pub async fn add_vehicle(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(vehicle): Json<Vehicle>,
) -> AppResult<(StatusCode, Json<Unit>)> {
    let unit = edit_unit(&state, id, |u| {
        add_entry(&mut u.vehicles.0, vehicle)?;
        Ok(())
    })
    .await?;
    tracing::info!(unit_id = id, user_id = user.user_id, "Vehicle added");
    Ok((StatusCode::CREATED, Json(unit)))
}

/// PUT /api/units/{id}/vehicles/{index}
#[utoipa::path(
    put,
    path = "/api/units/{id}/vehicles/{index}",
    tag = "units",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Unit id"),
        ("index" = i64, Path, description = "Position in the vehicle list"),
    ),
    request_body = VehiclePatch,
    responses(
        (status = 200, description = "Vehicle updated", body = Unit),
        (status = 404, description = "Unit or vehicle not found"),
    )
)]
pub async fn update_vehicle(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path((id, index)): Path<(DbId, i64)>,
    Json(patch): Json<VehiclePatch>,
) -> AppResult<Json<Unit>> {
    let unit = edit_unit(&state, id, |u| {
        update_entry(&mut u.vehicles.0, index, patch)?;
        Ok(())
    })
    .await?;
    Ok(Json(unit))
}

/// DELETE /api/units/{id}/vehicles/{index}
#[utoipa::path(
    delete,
    path = "/api/units/{id}/vehicles/{index}",
    tag = "units",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Unit id"),
        ("index" = i64, Path, description = "Position in the vehicle list"),
    ),
    responses(
        (status = 200, description = "Vehicle removed", body = Unit),
        (status = 404, description = "Unit or vehicle not found"),
    )
)]
pub async fn remove_vehicle(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path((id, index)): Path<(DbId, i64)>,
) -> AppResult<Json<Unit>> {
    let unit = edit_unit(&state, id, |u| {
        remove_entry(&mut u.vehicles.0, index)?;
        Ok(())
    })
    .await?;
    Ok(Json(unit))
}

/* --------------------------------------------------------------------------
Pets
-------------------------------------------------------------------------- */

/// POST /api/units/{id}/pets
#[utoipa::path(
    post,
    path = "/api/units/{id}/pets",
    tag = "units",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Unit id")),
    request_body = Pet,
    responses(
        (status = 201, description = "Pet added", body = Unit),
        (status = 404, description = "Unit not found"),
    )
)]
pub async fn add_pet(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(pet): Json<Pet>,
) -> AppResult<(StatusCode, Json<Unit>)> {
    let unit = edit_unit(&state, id, |u| {
        add_entry(&mut u.pets.0, pet)?;
        Ok(())
    })
    .await?;
    Ok((StatusCode::CREATED, Json(unit)))
}

/// DELETE /api/units/{id}/pets/{index}
#[utoipa::path(
    delete,
    path = "/api/units/{id}/pets/{index}",
    tag = "units",
    security(("bearer_auth" = [])),
    params(
        ("id" = i64, Path, description = "Unit id"),
        ("index" = i64, Path, description = "Position in the pet list"),
    ),
    responses(
        (status = 200, description = "Pet removed", body = Unit),
        (status = 404, description = "Unit or pet not found"),
    )
)]
pub async fn remove_pet(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path((id, index)): Path<(DbId, i64)>,
) -> AppResult<Json<Unit>> {
    let unit = edit_unit(&state, id, |u| {
        remove_entry(&mut u.pets.0, index)?;
        Ok(())
    })
    .await?;
    Ok(Json(unit))
}
