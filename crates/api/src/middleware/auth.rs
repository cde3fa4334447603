//! Bearer-token authentication for resident and staff accounts.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use society_core::error::CoreError;
use society_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

const NO_TOKEN: &str = "Not authorized, no token";
const TOKEN_FAILED: &str = "Not authorized, token failed";

/// The account behind a valid bearer token, as recorded in its claims.
///
/// The user row is not re-read here; handlers that need it (`/auth/me`) load
/// it themselves and report a missing row as 404.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub user_id: DbId,
    pub role: String,
}

impl AuthUser {
    /// 403 unless the caller holds one of `roles`.
    pub fn ensure_role(&self, roles: &[&str]) -> Result<(), AppError> {
        if roles.contains(&self.role.as_str()) {
            return Ok(());
        }
        Err(AppError::Core(CoreError::Forbidden(format!(
            "User role {} is not authorized to access this route",
            self.role
        ))))
    }
}

/// The token part of `Authorization: Bearer <token>`, if present.
fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

fn unauthorized(message: &str) -> AppError {
    AppError::Core(CoreError::Unauthorized(message.to_string()))
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = bearer_token(&parts.headers).ok_or_else(|| unauthorized(NO_TOKEN))?;
        let claims =
            validate_token(token, &state.config.jwt).map_err(|_| unauthorized(TOKEN_FAILED))?;

        Ok(AuthUser {
            user_id: claims.sub,
            role: claims.role,
        })
    }
}

#[cfg(test)]
mod tests {
    use axum::http::HeaderValue;

    use super::*;

    fn headers(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(AUTHORIZATION, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn bearer_prefix_required() {
        assert_eq!(bearer_token(&headers("Bearer abc.def")), Some("abc.def"));
        assert_eq!(bearer_token(&headers("Basic dXNlcg==")), None);
        assert_eq!(bearer_token(&headers("Bearer ")), None);
        assert_eq!(bearer_token(&HeaderMap::new()), None);
    }

    #[test]
    fn role_check() {
        let user = AuthUser {
            user_id: 1,
            role: "security".into(),
        };
        assert!(user.ensure_role(&["security", "management"]).is_ok());
        assert!(user.ensure_role(&["management"]).is_err());
    }
}
