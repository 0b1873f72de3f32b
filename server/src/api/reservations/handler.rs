//! Reservation API Handlers

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Reservation, ReservationCreate, ReservationDetail, ReservationFilter};
use crate::utils::AppResult;

/// POST /api/reservations - book a table (public)
///
/// Allocation and the confirmation notification are decoupled: the
/// reservation is committed before the notification is spawned, so a dead
/// webhook cannot lose a booking.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<ReservationCreate>,
) -> AppResult<(StatusCode, Json<ReservationDetail>)> {
    let reservation = state.allocator.reserve(payload).await?;

    state.notifier.spawn_confirmation(reservation.clone());

    Ok((StatusCode::CREATED, Json(reservation)))
}

/// GET /api/reservations?date=&time= - list reservations (admin)
pub async fn list(
    State(state): State<ServerState>,
    Query(filter): Query<ReservationFilter>,
) -> AppResult<Json<Vec<ReservationDetail>>> {
    let reservations = state.allocator.list(filter).await?;
    Ok(Json(reservations))
}

/// DELETE /api/reservations/:id - cancel a reservation (admin)
///
/// Removing the reservation frees its table for the slot.
pub async fn cancel(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Reservation>> {
    let cancelled = state.allocator.cancel(&id).await?;
    Ok(Json(cancelled))
}
