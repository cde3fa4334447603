//! Handlers for the `/notices` board.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use society_core::error::CoreError;
use society_core::notice::validate_notice;
use society_core::types::DbId;
use society_db::models::notice::{CreateNotice, Notice, UpdateNotice};
use society_db::repositories::NoticeRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManagement};
use crate::state::AppState;

fn notice_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Notice", id })
}

/// GET /api/notices
#[utoipa::path(
    get,
    path = "/api/notices",
    tag = "notices",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Notices, important and newest first", body = Vec<Notice>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Notice>>> {
    let notices = NoticeRepo::list(&state.pool).await?;
    Ok(Json(notices))
}

/// POST /api/notices
#[utoipa::path(
    post,
    path = "/api/notices",
    tag = "notices",
    security(("bearer_auth" = [])),
    request_body = CreateNotice,
    responses(
        (status = 201, description = "Notice posted", body = Notice),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn create(
    RequireManagement(user): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreateNotice>,
) -> AppResult<(StatusCode, Json<Notice>)> {
    validate_notice(&input.title, &input.content, &input.notice_type, input.event_date)?;
    let notice = NoticeRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(notice_id = notice.id, kind = %notice.notice_type, "Notice posted");
    Ok((StatusCode::CREATED, Json(notice)))
}

/// PUT /api/notices/{id}
#[utoipa::path(
    put,
    path = "/api/notices/{id}",
    tag = "notices",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Notice id")),
    request_body = UpdateNotice,
    responses(
        (status = 200, description = "Notice updated", body = Notice),
        (status = 400, description = "Validation failed"),
        (status = 404, description = "Notice not found"),
    )
)]
pub async fn update(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateNotice>,
) -> AppResult<Json<Notice>> {
    let current = NoticeRepo::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| notice_not_found(id))?;

    // Validate the notice as it will look after the update.
    validate_notice(
        input.title.as_deref().unwrap_or(&current.title),
        input.content.as_deref().unwrap_or(&current.content),
        input.notice_type.as_deref().unwrap_or(&current.notice_type),
        input.event_date.or(current.event_date),
    )?;

    let notice = NoticeRepo::update(&state.pool, id, &input)
        .await?
        .ok_or_else(|| notice_not_found(id))?;
    Ok(Json(notice))
}

/// DELETE /api/notices/{id}
#[utoipa::path(
    delete,
    path = "/api/notices/{id}",
    tag = "notices",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Notice id")),
    responses(
        (status = 204, description = "Notice deleted"),
        (status = 404, description = "Notice not found"),
    )
)]
pub async fn delete(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if NoticeRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(notice_not_found(id))
    }
}
