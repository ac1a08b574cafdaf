//! Authentication middleware

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use shared::error::AppError;

use super::{Caller, JwtError, JwtService};
use crate::security_log;
use crate::state::AppState;

/// Require a valid bearer token and insert the [`Caller`] into request extensions.
///
/// | Failure | Status |
/// |---------|--------|
/// | No Authorization header | 401 NotAuthenticated |
/// | Expired token | 401 TokenExpired |
/// | Anything else | 401 TokenInvalid |
pub async fn require_auth(
    State(state): State<AppState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    // CORS preflight
    if req.method() == http::Method::OPTIONS {
        return Ok(next.run(req).await);
    }

    let Some(header) = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
    else {
        security_log!("auth_missing", uri = %req.uri());
        return Err(AppError::not_authenticated());
    };

    let token = JwtService::extract_from_header(header)
        .ok_or_else(|| AppError::invalid_token("Invalid authorization header"))?;

    let caller = state
        .jwt
        .validate_token(token)
        .and_then(Caller::try_from)
        .map_err(|e| {
            security_log!("auth_failed", error = %e, uri = %req.uri());
            match e {
                JwtError::ExpiredToken => AppError::token_expired(),
                _ => AppError::invalid_token("Invalid token"),
            }
        })?;

    req.extensions_mut().insert(caller);
    Ok(next.run(req).await)
}
