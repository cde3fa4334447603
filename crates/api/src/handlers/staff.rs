//! Handlers for society staff, mounted under `/users/staff`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use society_core::error::CoreError;
use society_core::staff::{
    record_attendance, validate_attendance_status, validate_staff, AttendanceEntry,
};
use society_core::types::DbId;
use society_core::validation::validate_optional;
use society_db::models::staff::{CreateStaff, Staff, UpdateStaff};
use society_db::repositories::StaffRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManagement};
use crate::state::AppState;

fn staff_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Staff", id })
}

/// GET /api/users/staff/all
#[utoipa::path(
    get,
    path = "/api/users/staff/all",
    tag = "staff",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "All staff members", body = Vec<Staff>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Staff>>> {
    let staff = StaffRepo::list(&state.pool).await?;
    tracing::debug!(count = staff.len(), "Listed staff");
    Ok(Json(staff))
}

/// POST /api/users/staff
#[utoipa::path(
    post,
    path = "/api/users/staff",
    tag = "staff",
    security(("bearer_auth" = [])),
    request_body = CreateStaff,
    responses(
        (status = 201, description = "Staff member added", body = Staff),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn create(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreateStaff>,
) -> AppResult<(StatusCode, Json<Staff>)> {
    validate_staff(&input.name, &input.role, &input.phone, &input.shift)?;
    for entry in &input.attendance {
        validate_attendance_status(&entry.status)?;
    }
    let staff = StaffRepo::create(&state.pool, &input).await?;
    tracing::info!(staff_id = staff.id, "Staff member added");
    Ok((StatusCode::CREATED, Json(staff)))
}

/// PUT /api/users/staff/{id}
#[utoipa::path(
    put,
    path = "/api/users/staff/{id}",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Staff id")),
    request_body = UpdateStaff,
    responses(
        (status = 200, description = "Staff member updated", body = Staff),
        (status = 404, description = "Staff member not found"),
    )
)]
pub async fn update(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateStaff>,
) -> AppResult<Json<Staff>> {
    validate_optional("name", input.name.as_deref())?;
    validate_optional("role", input.role.as_deref())?;
    validate_optional("phone", input.phone.as_deref())?;
    validate_optional("shift", input.shift.as_deref())?;
    let staff = StaffRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| staff_not_found(id))?;
    Ok(Json(staff))
}

/// DELETE /api/users/staff/{id}
#[utoipa::path(
    delete,
    path = "/api/users/staff/{id}",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Staff id")),
    responses(
        (status = 204, description = "Staff member removed"),
        (status = 404, description = "Staff member not found"),
    )
)]
pub async fn delete(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if StaffRepo::delete(&state.pool, id).await? {
        tracing::info!(staff_id = id, "Staff member removed");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(staff_not_found(id))
    }
}

/// POST /api/users/staff/{id}/attendance
///
/// Marks attendance for one day, replacing an earlier mark for the same date.
#[utoipa::path(
    post,
    path = "/api/users/staff/{id}/attendance",
    tag = "staff",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Staff id")),
    request_body = AttendanceEntry,
    responses(
        (status = 200, description = "Attendance recorded", body = Staff),
        (status = 400, description = "Unknown attendance status"),
        (status = 404, description = "Staff member not found"),
    )
)]
pub async fn record(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(entry): Json<AttendanceEntry>,
) -> AppResult<Json<Staff>> {
    let date = entry.date;
    let staff = StaffRepo::modify_attendance(&state.pool, id, |s| -> AppResult<()> {
        record_attendance(&mut s.attendance.0, entry)?;
        Ok(())
    })
    .await?
    .ok_or_else(|| staff_not_found(id))?;

    tracing::info!(staff_id = id, %date, "Attendance recorded");
    Ok(Json(staff))
}
