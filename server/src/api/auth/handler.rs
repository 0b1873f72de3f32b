//! Authentication Handlers

use std::time::Duration;

use axum::{Json, extract::State};
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::utils::AppError;

/// Fixed delay for authentication to prevent timing attacks
const AUTH_FIXED_DELAY_MS: u64 = 500;

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub username: String,
    pub role: String,
    /// Seconds until the token expires
    pub expires_in: i64,
}

/// POST /api/auth/login
///
/// Verifies the administrator credentials and returns a JWT. The error
/// message is the same for unknown usernames and wrong passwords.
pub async fn login(
    State(state): State<ServerState>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    // Fixed delay before checking the result
    tokio::time::sleep(Duration::from_millis(AUTH_FIXED_DELAY_MS)).await;

    if !state.admin.verify(&req.username, &req.password) {
        tracing::warn!(username = %req.username, "Login failed - invalid credentials");
        return Err(AppError::invalid_credentials());
    }

    let token = state
        .jwt_service
        .generate_token("admin", &state.admin.username, "admin")
        .map_err(|e| AppError::internal(format!("Failed to generate token: {}", e)))?;

    let expires_in = state.jwt_service.config.expiration_minutes * 60;

    tracing::info!(username = %state.admin.username, "Administrator logged in");

    Ok(Json(LoginResponse {
        token,
        username: state.admin.username.clone(),
        role: "admin".to_string(),
        expires_in,
    }))
}
