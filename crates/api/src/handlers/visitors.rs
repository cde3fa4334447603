//! Handlers for the `/visitors` gate log.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use chrono::Utc;
use society_core::error::CoreError;
use society_core::records::{validate_visitor, VALID_VISITOR_TYPES};
use society_core::types::DbId;
use society_core::validation::{validate_one_of, validate_optional};
use society_db::models::visitor::{
    CheckInVisitor, UpdateVisitor, Visitor, VisitorDetail, VisitorFilter,
};
use society_db::repositories::VisitorRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireAuth;
use crate::state::AppState;

fn visitor_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Visitor", id })
}

/// GET /api/visitors
#[utoipa::path(
    get,
    path = "/api/visitors",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(VisitorFilter),
    responses((status = 200, description = "Visitors, latest check-in first", body = Vec<VisitorDetail>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Query(filter): Query<VisitorFilter>,
) -> AppResult<Json<Vec<VisitorDetail>>> {
    let visitors = VisitorRepo::list(&state.pool, &filter).await?;
    tracing::debug!(count = visitors.len(), active = filter.active, "Listed visitors");
    Ok(Json(visitors))
}

/// POST /api/visitors/checkin
#[utoipa::path(
    post,
    path = "/api/visitors/checkin",
    tag = "visitors",
    security(("bearer_auth" = [])),
    request_body = CheckInVisitor,
    responses(
        (status = 201, description = "Visitor checked in", body = Visitor),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn check_in(
    RequireAuth(user): RequireAuth,
    State(state): State<AppState>,
    Json(input): Json<CheckInVisitor>,
) -> AppResult<(StatusCode, Json<Visitor>)> {
    validate_visitor(&input.name, &input.phone, &input.purpose, &input.visitor_type)?;
    let visitor = VisitorRepo::check_in(&state.pool, &input, Utc::now()).await?;
    tracing::info!(
        visitor_id = visitor.id,
        unit_id = ?visitor.unit_id,
        logged_by = user.user_id,
        "Visitor checked in"
    );
    Ok((StatusCode::CREATED, Json(visitor)))
}

/// PUT /api/visitors/{id}/checkout
#[utoipa::path(
    put,
    path = "/api/visitors/{id}/checkout",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Visitor id")),
    responses(
        (status = 200, description = "Visitor checked out", body = Visitor),
        (status = 404, description = "Visitor not found"),
        (status = 409, description = "Visitor has already checked out"),
    )
)]
pub async fn check_out(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Visitor>> {
    if let Some(visitor) = VisitorRepo::check_out(&state.pool, id, Utc::now()).await? {
        tracing::info!(visitor_id = id, "Visitor checked out");
        return Ok(Json(visitor));
    }

    match VisitorRepo::find_by_id(&state.pool, id).await? {
        Some(_) => Err(AppError::Core(CoreError::Conflict(
            "Visitor has already checked out".into(),
        ))),
        None => Err(visitor_not_found(id)),
    }
}

/// PUT /api/visitors/{id}
#[utoipa::path(
    put,
    path = "/api/visitors/{id}",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Visitor id")),
    request_body = UpdateVisitor,
    responses(
        (status = 200, description = "Visitor updated", body = Visitor),
        (status = 404, description = "Visitor not found"),
    )
)]
pub async fn update(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateVisitor>,
) -> AppResult<Json<Visitor>> {
    validate_optional("name", input.name.as_deref())?;
    validate_optional("phone", input.phone.as_deref())?;
    validate_optional("purpose", input.purpose.as_deref())?;
    if let Some(visitor_type) = &input.visitor_type {
        validate_one_of("visitor type", visitor_type, VALID_VISITOR_TYPES)?;
    }

    let visitor = VisitorRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| visitor_not_found(id))?;
    Ok(Json(visitor))
}

/// DELETE /api/visitors/{id}
#[utoipa::path(
    delete,
    path = "/api/visitors/{id}",
    tag = "visitors",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Visitor id")),
    responses(
        (status = 204, description = "Visitor entry removed"),
        (status = 404, description = "Visitor not found"),
    )
)]
pub async fn delete(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if VisitorRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(visitor_not_found(id))
    }
}
