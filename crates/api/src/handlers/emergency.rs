//! Handlers for `/emergency` contacts.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use society_core::error::CoreError;
use society_core::types::DbId;
use society_core::validation::{validate_optional, validate_required};
use society_db::models::emergency::{
    CreateEmergencyContact, EmergencyContact, UpdateEmergencyContact,
};
use society_db::repositories::EmergencyRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManagement};
use crate::state::AppState;

fn contact_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound {
        entity: "Emergency contact",
        id,
    })
}

/// GET /api/emergency
#[utoipa::path(
    get,
    path = "/api/emergency",
    tag = "emergency",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Emergency contacts", body = Vec<EmergencyContact>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<EmergencyContact>>> {
    let contacts = EmergencyRepo::list(&state.pool).await?;
    Ok(Json(contacts))
}

/// POST /api/emergency
#[utoipa::path(
    post,
    path = "/api/emergency",
    tag = "emergency",
    security(("bearer_auth" = [])),
    request_body = CreateEmergencyContact,
    responses(
        (status = 201, description = "Contact added", body = EmergencyContact),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn create(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreateEmergencyContact>,
) -> AppResult<(StatusCode, Json<EmergencyContact>)> {
    validate_required("name", &input.name)?;
    validate_required("type", &input.contact_type)?;
    validate_required("phone", &input.phone)?;
    let contact = EmergencyRepo::create(&state.pool, &input).await?;
    Ok((StatusCode::CREATED, Json(contact)))
}

/// PUT /api/emergency/{id}
#[utoipa::path(
    put,
    path = "/api/emergency/{id}",
    tag = "emergency",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Contact id")),
    request_body = UpdateEmergencyContact,
    responses(
        (status = 200, description = "Contact updated", body = EmergencyContact),
        (status = 404, description = "Contact not found"),
    )
)]
pub async fn update(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateEmergencyContact>,
) -> AppResult<Json<EmergencyContact>> {
    validate_optional("name", input.name.as_deref())?;
    validate_optional("type", input.contact_type.as_deref())?;
    validate_optional("phone", input.phone.as_deref())?;
    let contact = EmergencyRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| contact_not_found(id))?;
    Ok(Json(contact))
}

/// DELETE /api/emergency/{id}
#[utoipa::path(
    delete,
    path = "/api/emergency/{id}",
    tag = "emergency",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Contact id")),
    responses(
        (status = 204, description = "Contact removed"),
        (status = 404, description = "Contact not found"),
    )
)]
pub async fn delete(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if EmergencyRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(contact_not_found(id))
    }
}
