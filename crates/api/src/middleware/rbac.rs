//! Route guards built on [`AuthUser`].
//!
//! Handlers take one of these as their first argument; the guard runs before
//! any body is parsed.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use society_core::roles::ROLE_MANAGEMENT;

use super::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;

/// Any signed-in resident or staff member.
pub struct RequireAuth(pub AuthUser);

/// Society management only. Other roles get 403.
pub struct RequireManagement(pub AuthUser);

impl FromRequestParts<AppState> for RequireAuth {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        AuthUser::from_request_parts(parts, state).await.map(RequireAuth)
    }
}

impl FromRequestParts<AppState> for RequireManagement {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let user = AuthUser::from_request_parts(parts, state).await?;
        user.ensure_role(&[ROLE_MANAGEMENT])?;
        Ok(RequireManagement(user))
    }
}
