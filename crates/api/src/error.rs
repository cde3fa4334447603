use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use society_core::error::CoreError;

/// Error type returned by every handler.
///
/// Domain failures arrive as [`CoreError`], storage failures as
/// [`sqlx::Error`]. Rendered as `{"error": message, "code": CODE}`.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Core(#[from] CoreError),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Internal error: {0}")]
    InternalError(String),
}

pub type AppResult<T> = Result<T, AppError>;

#[derive(Serialize)]
struct ErrorBody {
    error: String,
    code: &'static str,
}

type Rendered = (StatusCode, &'static str, String);

/// 500 with the detail kept in the log only.
fn sanitized(detail: &dyn std::fmt::Display) -> Rendered {
    tracing::error!(error = %detail, "Request failed with internal error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        "INTERNAL_ERROR",
        "An internal error occurred".to_string(),
    )
}

fn render_core(err: &CoreError) -> Rendered {
    match err {
        CoreError::NotFound { entity, id } => (
            StatusCode::NOT_FOUND,
            "NOT_FOUND",
            format!("{entity} with id {id} not found"),
        ),
        CoreError::MissingEntry(label) => {
            (StatusCode::NOT_FOUND, "NOT_FOUND", format!("{label} not found"))
        }
        CoreError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
        CoreError::Conflict(msg) => (StatusCode::CONFLICT, "CONFLICT", msg.clone()),
        CoreError::Unauthorized(msg) => (StatusCode::UNAUTHORIZED, "UNAUTHORIZED", msg.clone()),
        CoreError::Forbidden(msg) => (StatusCode::FORBIDDEN, "FORBIDDEN", msg.clone()),
        CoreError::Internal(msg) => sanitized(msg),
    }
}

/// Human message for a violated `uq_*` constraint.
fn duplicate_message(constraint: &str) -> String {
    match constraint {
        "uq_users_email" => "Email is already registered".to_string(),
        "uq_units_number" => "Unit number already exists".to_string(),
        "uq_parking_slots_slot_number" => "Parking slot number already exists".to_string(),
        other => format!("Duplicate value violates unique constraint: {other}"),
    }
}

/// Constraint violations are the client's fault; everything else is ours.
fn render_sqlx(err: &sqlx::Error) -> Rendered {
    let db_err = match err {
        sqlx::Error::RowNotFound => {
            return (StatusCode::NOT_FOUND, "NOT_FOUND", "Resource not found".to_string())
        }
        sqlx::Error::Database(db_err) => db_err,
        other => return sanitized(other),
    };

    let constraint = db_err.constraint().unwrap_or("unknown");
    match db_err.code().as_deref() {
        Some("23505") if constraint.starts_with("uq_") => {
            (StatusCode::CONFLICT, "CONFLICT", duplicate_message(constraint))
        }
        Some("23503") => (
            StatusCode::BAD_REQUEST,
            "BAD_REQUEST",
            format!("Referenced user, unit or facility does not exist ({constraint})"),
        ),
        Some("23514") => (
            StatusCode::BAD_REQUEST,
            "VALIDATION_ERROR",
            format!("Value violates check constraint: {constraint}"),
        ),
        _ => sanitized(db_err),
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, error) = match &self {
            AppError::Core(core) => render_core(core),
            AppError::Database(err) => render_sqlx(err),
            AppError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg.clone()),
            AppError::InternalError(msg) => sanitized(msg),
        };
        (status, Json(ErrorBody { error, code })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_constraints_read_naturally() {
        assert_eq!(duplicate_message("uq_users_email"), "Email is already registered");
        assert_eq!(duplicate_message("uq_units_number"), "Unit number already exists");
        assert!(duplicate_message("uq_other").ends_with("uq_other"));
    }

    #[test]
    fn household_miss_is_404() {
        let response = AppError::from(CoreError::MissingEntry("Vehicle")).into_response();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
