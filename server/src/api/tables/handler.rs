//! Dining Table API Handlers

use axum::{
    Json,
    extract::{Path, State},
};

use crate::core::ServerState;
use crate::db::models::{
    DiningTable, DiningTableAvailability, DiningTableCreate, DiningTableUpdate,
};
use crate::db::repository::{DiningTableRepository, ReservationRepository};
use crate::utils::{AppError, AppResult};

/// GET /api/tables - all tables (public)
pub async fn list(State(state): State<ServerState>) -> AppResult<Json<Vec<DiningTable>>> {
    let repo = DiningTableRepository::new(state.get_db());
    let tables = repo.find_all().await?;
    Ok(Json(tables))
}

/// POST /api/tables - create a table (admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<DiningTableCreate>,
) -> AppResult<Json<DiningTable>> {
    if payload.seats < 1 {
        return Err(AppError::validation("seats must be at least 1"));
    }

    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.create(payload).await?;
    Ok(Json(table))
}

/// PUT /api/tables/:id - update a table (admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableUpdate>,
) -> AppResult<Json<DiningTable>> {
    if let Some(seats) = payload.seats
        && seats < 1
    {
        return Err(AppError::validation("seats must be at least 1"));
    }

    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.update(&id, payload).await?;
    Ok(Json(table))
}

/// PATCH /api/tables/:id - set the administrative block flag (admin)
///
/// Affects future allocations only; reservations already holding the table
/// stay untouched.
pub async fn set_availability(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<DiningTableAvailability>,
) -> AppResult<Json<DiningTable>> {
    let repo = DiningTableRepository::new(state.get_db());
    let table = repo.set_availability(&id, payload.available).await?;
    Ok(Json(table))
}

/// DELETE /api/tables/:id - delete a table (admin)
///
/// Refused while reservations still reference the table; cancel them first.
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let tables = DiningTableRepository::new(state.get_db());
    let reservations = ReservationRepository::new(state.get_db());

    let table = tables
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("Dining table {} not found", id)))?;

    if let Some(table_id) = &table.id
        && reservations.exists_for_table(table_id).await?
    {
        return Err(AppError::conflict(
            "Table has reservations; cancel them before deleting",
        ));
    }

    let result = tables.delete(&id).await?;
    Ok(Json(result))
}
