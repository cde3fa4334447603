//! Handlers for the `/users` resource (management only).

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use serde::Deserialize;
use society_core::error::CoreError;
use society_core::roles::{validate_role, ROLE_RESIDENT};
use society_core::types::DbId;
use society_core::validation::{validate_email, validate_optional, validate_required};
use society_db::models::user::{CreateUser, UpdateUser, UserProfile};
use society_db::repositories::UserRepo;
use utoipa::ToSchema;

use crate::auth::password::hash_new_password;
use crate::error::{AppError, AppResult};
use crate::middleware::rbac::RequireManagement;
use crate::state::AppState;

/// Request body for registering a user.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateUserRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    /// Defaults to `resident`.
    pub role: Option<String>,
    pub unit_number: Option<String>,
    pub phone: Option<String>,
}

/// Request body for updating a user. A supplied password is re-hashed.
#[derive(Debug, Default, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateUserRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub password: Option<String>,
    pub role: Option<String>,
    pub unit_number: Option<String>,
    pub phone: Option<String>,
}

fn user_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "User", id })
}

/// GET /api/users
#[utoipa::path(
    get,
    path = "/api/users",
    tag = "users",
    security(("bearer_auth" = [])),
    responses(
        (status = 200, description = "All users", body = Vec<UserProfile>),
        (status = 403, description = "Management role required"),
    )
)]
pub async fn list(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<UserProfile>>> {
    let users = UserRepo::list(&state.pool).await?;
    tracing::debug!(count = users.len(), "Listed users");
    Ok(Json(users))
}

/// POST /api/users
#[utoipa::path(
    post,
    path = "/api/users",
    tag = "users",
    security(("bearer_auth" = [])),
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserProfile),
        (status = 400, description = "Validation failed"),
        (status = 409, description = "Email already registered"),
    )
)]
pub async fn create(
    RequireManagement(admin): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreateUserRequest>,
) -> AppResult<(StatusCode, Json<UserProfile>)> {
    validate_required("name", &input.name)?;
    validate_email(input.email.trim())?;
    let role = input.role.unwrap_or_else(|| ROLE_RESIDENT.to_string());
    validate_role(&role)?;

    let create = CreateUser {
        name: input.name,
        email: input.email.trim().to_string(),
        password_hash: hash_new_password(&input.password)?,
        role,
        unit_number: input.unit_number,
        phone: input.phone,
    };
    let user = UserRepo::create(&state.pool, &create).await?;

    tracing::info!(user_id = user.id, created_by = admin.user_id, "User registered");
    Ok((StatusCode::CREATED, Json(user.into())))
}

/// GET /api/users/{id}
#[utoipa::path(
    get,
    path = "/api/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 200, description = "User found", body = UserProfile),
        (status = 404, description = "User not found"),
    )
)]
pub async fn get_by_id(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<UserProfile>> {
    let user = UserRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| user_not_found(id))?;
    Ok(Json(user.into()))
}

/// PUT /api/users/{id}
#[utoipa::path(
    put,
    path = "/api/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User id")),
    request_body = UpdateUserRequest,
    responses(
        (status = 200, description = "User updated", body = UserProfile),
        (status = 404, description = "User not found"),
        (status = 409, description = "Email already registered"),
    )
)]
pub async fn update(
    RequireManagement(admin): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateUserRequest>,
) -> AppResult<Json<UserProfile>> {
    validate_optional("name", input.name.as_deref())?;
    if let Some(email) = input.email.as_deref() {
        validate_email(email.trim())?;
    }
    if let Some(role) = input.role.as_deref() {
        validate_role(role)?;
    }
    let password_hash = input.password.as_deref().map(hash_new_password).transpose()?;

    let update = UpdateUser {
        name: input.name,
        email: input.email.map(|e| e.trim().to_string()),
        password_hash,
        role: input.role,
        unit_number: input.unit_number,
        phone: input.phone,
    };
    let user = UserRepo::update(&state.pool, id, &update)
        .await?
        .ok_or_else(|| user_not_found(id))?;

    tracing::info!(user_id = id, updated_by = admin.user_id, "User updated");
    Ok(Json(user.into()))
}

/// DELETE /api/users/{id}
#[utoipa::path(
    delete,
    path = "/api/users/{id}",
    tag = "users",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "User id")),
    responses(
        (status = 204, description = "User deleted"),
        (status = 404, description = "User not found"),
    )
)]
pub async fn delete(
    RequireManagement(admin): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if UserRepo::delete(&state.pool, id).await? {
        tracing::info!(user_id = id, deleted_by = admin.user_id, "User deleted");
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(user_not_found(id))
    }
}
