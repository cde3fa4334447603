//! Handlers for the `/vendors` directory.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use society_core::error::CoreError;
use society_core::records::validate_rating;
use society_core::types::DbId;
use society_core::validation::{validate_email, validate_optional, validate_required};
use society_db::models::vendor::{CreateVendor, UpdateVendor, Vendor};
use society_db::repositories::VendorRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManagement};
use crate::state::AppState;

fn vendor_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Vendor", id })
}

/// GET /api/vendors
#[utoipa::path(
    get,
    path = "/api/vendors",
    tag = "vendors",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All vendors", body = Vec<Vendor>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Vendor>>> {
    let vendors = VendorRepo::list(&state.pool).await?;
    Ok(Json(vendors))
}

/// GET /api/vendors/{id}
#[utoipa::path(
    get,
    path = "/api/vendors/{id}",
    tag = "vendors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Vendor id")),
    responses(
        (status = 200, description = "Vendor found", body = Vendor),
        (status = 404, description = "Vendor not found"),
    )
)]
pub async fn get_by_id(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Vendor>> {
    let vendor = VendorRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| vendor_not_found(id))?;
    Ok(Json(vendor))
}

/// POST /api/vendors
#[utoipa::path(
    post,
    path = "/api/vendors",
    tag = "vendors",
    security(("bearer_auth" = [])),
    request_body = CreateVendor,
    responses(
        (status = 201, description = "Vendor added", body = Vendor),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn create(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreateVendor>,
) -> AppResult<(StatusCode, Json<Vendor>)> {
    validate_required("name", &input.name)?;
    validate_required("category", &input.category)?;
    validate_required("phone", &input.phone)?;
    if let Some(email) = &input.email {
        validate_email(email)?;
    }
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let vendor = VendorRepo::create(&state.pool, &input).await?;
    tracing::info!(vendor_id = vendor.id, category = %vendor.category, "Vendor added");
    Ok((StatusCode::CREATED, Json(vendor)))
}

/// PUT /api/vendors/{id}
#[utoipa::path(
    put,
    path = "/api/vendors/{id}",
    tag = "vendors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Vendor id")),
    request_body = UpdateVendor,
    responses(
        (status = 200, description = "Vendor updated", body = Vendor),
        (status = 404, description = "Vendor not found"),
    )
)]
pub async fn update(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVendor>,
) -> AppResult<Json<Vendor>> {
    validate_optional("name", input.name.as_deref())?;
    validate_optional("category", input.category.as_deref())?;
    validate_optional("phone", input.phone.as_deref())?;
    if let Some(rating) = input.rating {
        validate_rating(rating)?;
    }

    let vendor = VendorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| vendor_not_found(id))?;
    Ok(Json(vendor))
}

/// DELETE /api/vendors/{id}
#[utoipa::path(
    delete,
    path = "/api/vendors/{id}",
    tag = "vendors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Vendor id")),
    responses(
        (status = 204, description = "Vendor removed"),
        (status = 404, description = "Vendor not found"),
    )
)]
pub async fn delete(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if VendorRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(vendor_not_found(id))
    }
}
