//! Handlers for shared society `/documents`.
//!
//! Only metadata and a file URL are stored; uploads happen elsewhere.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use society_core::error::CoreError;
use society_core::records::validate_document;
use society_core::types::DbId;
use society_db::models::document::{CreateDocument, Document};
use society_db::repositories::DocumentRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::rbac::{RequireAuth, RequireManagement};
use crate::state::AppState;

/// GET /api/documents
#[utoipa::path(
    get,
    path = "/api/documents",
    tag = "documents",
    security(("bearer_auth" = [])),
    responses((status = 200, description = "Documents, newest first", body = Vec<Document>))
)]
pub async fn list(
    RequireAuth(_): RequireAuth,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Document>>> {
    let documents = DocumentRepo::list(&state.pool).await?;
    Ok(Json(documents))
}

/// POST /api/documents
#[utoipa::path(
    post,
    path = "/api/documents",
    tag = "documents",
    security(("bearer_auth" = [])),
    request_body = CreateDocument,
    responses(
        (status = 201, description = "Document added", body = Document),
        (status = 400, description = "Validation failed"),
    )
)]
pub async fn create(
    RequireManagement(user): RequireManagement,
    State(state): State<AppState>,
    Json(input): Json<CreateDocument>,
) -> AppResult<(StatusCode, Json<Document>)> {
    validate_document(&input.title, &input.category, &input.file_type)?;
    let document = DocumentRepo::create(&state.pool, user.user_id, &input).await?;
    tracing::info!(document_id = document.id, uploaded_by = user.user_id, "Document added");
    Ok((StatusCode::CREATED, Json(document)))
}

/// DELETE /api/documents/{id}
#[utoipa::path(
    delete,
    path = "/api/documents/{id}",
    tag = "documents",
    security(("bearer_auth" = [])),
    params(("id" = i64, Path, description = "Document id")),
    responses(
        (status = 204, description = "Document deleted"),
        (status = 404, description = "Document not found"),
    )
)]
pub async fn delete(
    RequireManagement(_): RequireManagement,
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<StatusCode> {
    if DocumentRepo::delete(&state.pool, id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(AppError::Core(CoreError::NotFound {
            entity: "Document",
            id,
        }))
    }
}
