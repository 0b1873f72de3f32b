//! Authentication middleware
//!
//! Two layers work together:
//!
//! - [`authenticate`] runs on every request. It parses a Bearer token when
//!   one is present and injects [`CurrentUser`] into request extensions.
//!   Requests without a token pass through untouched, since most of the
//!   API is public.
//! - [`require_admin`] guards the administrative route groups. It rejects
//!   requests whose extensions carry no user (401) or a non-admin user
//!   (403).

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::auth::{CurrentUser, JwtError, JwtService};
use crate::core::ServerState;
use crate::utils::AppError;

/// Parse and validate a Bearer token when present
///
/// A present-but-invalid token is rejected immediately rather than being
/// treated as anonymous, so clients learn their token is bad on any route.
pub async fn authenticate(
    State(state): State<ServerState>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = req
        .headers()
        .get(http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok());

    let Some(header) = auth_header else {
        return Ok(next.run(req).await);
    };

    let token = JwtService::extract_from_header(header).ok_or(AppError::InvalidToken)?;

    match state.jwt_service.validate_token(token) {
        Ok(claims) => {
            let user = CurrentUser::from(claims);
            req.extensions_mut().insert(user);
            Ok(next.run(req).await)
        }
        Err(e) => {
            tracing::warn!(error = %e, uri = %req.uri(), "Token validation failed");
            match e {
                JwtError::ExpiredToken => Err(AppError::TokenExpired),
                _ => Err(AppError::InvalidToken),
            }
        }
    }
}

/// Require an authenticated admin user
pub async fn require_admin(req: Request, next: Next) -> Result<Response, AppError> {
    let user = req
        .extensions()
        .get::<CurrentUser>()
        .ok_or(AppError::Unauthorized)?;

    if !user.is_admin() {
        tracing::warn!(
            username = %user.username,
            role = %user.role,
            uri = %req.uri(),
            "Admin access denied"
        );
        return Err(AppError::forbidden("Administrator role required"));
    }

    Ok(next.run(req).await)
}
