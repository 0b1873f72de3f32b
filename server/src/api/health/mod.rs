//! Health check endpoint

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use crate::core::ServerState;

#[derive(Serialize)]
pub struct HealthStatus {
    status: &'static str,
    database: bool,
}

pub fn router() -> Router<ServerState> {
    Router::new().route("/health", get(health))
}

/// GET /health - liveness plus a database round trip
async fn health(State(state): State<ServerState>) -> Json<HealthStatus> {
    let database = state.db.query("RETURN 1").await.is_ok();
    let status = if database { "ok" } else { "degraded" };
    Json(HealthStatus { status, database })
}
