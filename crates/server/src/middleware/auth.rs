//! Admin authentication extractor.
//!
//! Admin endpoints require the `x-admin-token` header to match the
//! configured token. The comparison is plain equality, as the original
//! deployment shape demands; the token travels over TLS and is not a
//! per-user credential.

use axum::{extract::FromRequestParts, http::request::Parts};
use secrecy::ExposeSecret;

use crate::error::AppError;
use crate::state::AppState;

/// Header carrying the admin token.
const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

/// Extractor that requires a valid admin token.
///
/// # Example
///
/// ```rust,ignore
/// async fn admin_handler(
///     _admin: RequireAdmin,
///     State(state): State<AppState>,
/// ) -> impl IntoResponse {
///     // only reached with a valid x-admin-token header
/// }
/// ```
pub struct RequireAdmin;

impl FromRequestParts<AppState> for RequireAdmin {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let presented = parts
            .headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok());

        match presented {
            Some(token) if token == state.config().admin_token.expose_secret() => Ok(Self),
            _ => Err(AppError::Unauthorized),
        }
    }
}
