//! JWT-based authentication extractor for Axum handlers.

use axum::extract::FromRequestParts;
use axum::http::header::AUTHORIZATION;
use axum::http::request::Parts;
use payroll_core::error::CoreError;
use payroll_core::types::DbId;

use crate::auth::jwt::validate_token;
use crate::error::AppError;
use crate::state::AppState;

/// Authenticated user extracted from the token in the `Authorization` header.
///
/// Use this as an extractor parameter in any handler that requires authentication:
///
/// ```ignore
/// async fn my_handler(user: AuthUser) -> AppResult<Json<()>> {
///     tracing::info!(user_id = user.user_id, username = %user.username, "handling request");
///     Ok(Json(()))
/// }
/// ```
///
/// Rejections:
/// - no usable credential in the header: 401 `Missing credentials`
/// - credential present but invalid or expired: 403 `Invalid token or expired`
#[derive(Debug, Clone)]
pub struct AuthUser {
    /// The user's internal database id (from `claims.user_id`).
    pub user_id: DbId,
    /// The username recorded in the token.
    pub username: String,
}

/// Pull the credential out of an `Authorization` header value.
///
/// A leading `Bearer ` scheme is optional; whatever follows it (or the whole
/// value, when there is no scheme) is the token. Blank values yield `None`.
pub fn credential_from_header(value: &str) -> Option<&str> {
    let value = value.trim();
    let token = match value.split_once(' ') {
        Some((scheme, rest)) if scheme.eq_ignore_ascii_case("bearer") => rest.trim(),
        None if value.eq_ignore_ascii_case("bearer") => "",
        _ => value,
    };
    (!token.is_empty()).then_some(token)
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(credential_from_header)
            .ok_or_else(|| {
                AppError::Core(CoreError::Unauthorized("Missing credentials".into()))
            })?;

        let claims = validate_token(token, &state.config.jwt).map_err(|reason| {
            tracing::debug!(%reason, "Rejected access token");
            AppError::Core(CoreError::Forbidden("Invalid token or expired".into()))
        })?;

        Ok(AuthUser {
            user_id: claims.user_id,
            username: claims.username,
        })
    }
}
