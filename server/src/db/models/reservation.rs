//! Reservation Model

use super::serde_helpers;
use super::{DiningTable, DiningTableId, SeatingType};
use serde::{Deserialize, Serialize};
use surrealdb::RecordId;
use validator::Validate;

/// Reservation ID type
pub type ReservationId = RecordId;

/// Reservation entity as stored
///
/// One reservation books exactly one table for one `(date, time)` slot.
/// The unique index on `(table_id, date, time)` is the double-booking guard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Reservation {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ReservationId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    /// ISO calendar date, "YYYY-MM-DD"
    pub date: String,
    /// Slot time, "HH:MM", from the fixed slot set
    pub time: String,
    pub guests: i64,
    pub seating: SeatingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    #[serde(with = "serde_helpers::record_id")]
    pub table_id: DiningTableId,
    /// Epoch millis
    pub created_at: i64,
}

/// Reservation request payload (POST /api/reservations)
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ReservationCreate {
    #[validate(length(min = 1, max = 100, message = "first_name must be 1-100 characters"))]
    pub first_name: String,
    #[validate(length(min = 1, max = 100, message = "last_name must be 1-100 characters"))]
    pub last_name: String,
    #[validate(email(message = "email is not a valid address"))]
    pub email: String,
    #[validate(length(min = 1, max = 40, message = "phone must be 1-40 characters"))]
    pub phone: String,
    pub date: String,
    pub time: String,
    #[validate(range(min = 1, max = 50, message = "guests must be between 1 and 50"))]
    pub guests: i64,
    pub seating: SeatingType,
    #[validate(length(max = 500, message = "special_requests is too long (max 500)"))]
    pub special_requests: Option<String>,
    #[validate(length(max = 100, message = "occasion is too long (max 100)"))]
    pub occasion: Option<String>,
}

/// Reservation joined with its assigned table
///
/// Built by the repository from the reservation row and the table it
/// references; this is the shape the API serves.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ReservationDetail {
    #[serde(default, with = "serde_helpers::option_record_id")]
    pub id: Option<ReservationId>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub date: String,
    pub time: String,
    pub guests: i64,
    pub seating: SeatingType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub special_requests: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub occasion: Option<String>,
    pub table: DiningTable,
    pub created_at: i64,
}

impl ReservationDetail {
    pub fn from_parts(reservation: Reservation, table: DiningTable) -> Self {
        Self {
            id: reservation.id,
            first_name: reservation.first_name,
            last_name: reservation.last_name,
            email: reservation.email,
            phone: reservation.phone,
            date: reservation.date,
            time: reservation.time,
            guests: reservation.guests,
            seating: reservation.seating,
            special_requests: reservation.special_requests,
            occasion: reservation.occasion,
            table,
            created_at: reservation.created_at,
        }
    }
}

/// Query filter for listing reservations
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ReservationFilter {
    pub date: Option<String>,
    pub time: Option<String>,
}
