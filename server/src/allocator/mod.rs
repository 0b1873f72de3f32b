//! Table Allocator
//!
//! Maps a reservation request to a single dining table:
//!
//! 1. validate the request
//! 2. query candidate tables (seating type, `seats >= guests`, not blocked),
//!    smallest first
//! 3. skip tables already booked for the requested `(date, time)` slot
//! 4. claim the first remaining candidate by inserting the reservation row;
//!    the unique `(table_id, date, time)` index turns the insert into an
//!    atomic compare-and-swap, so two concurrent requests can never both
//!    book the same table for the same slot
//! 5. if a claim loses the race, fall through to the next candidate;
//!    when no candidate can be claimed the request fails with a 409
//!
//! A reservation is a single row insert, so there is no partial-state
//! window to roll back. Cancelling deletes the row, which releases the slot
//! tuple and makes the table selectable again.

use chrono::{NaiveDate, Utc};
use std::collections::HashSet;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use validator::Validate;

use crate::db::models::{
    Reservation, ReservationCreate, ReservationDetail, ReservationFilter,
};
use crate::db::repository::{
    DiningTableRepository, RepoError, ReservationRepository,
};
use crate::utils::AppError;

/// Bookable time slots, half-hourly from opening to last seating
pub const ALLOWED_SLOTS: [&str; 23] = [
    "11:00", "11:30", "12:00", "12:30", "13:00", "13:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00", "17:30", "18:00", "18:30", "19:00", "19:30", "20:00", "20:30",
    "21:00", "21:30", "22:00",
];

/// User-facing reason carried by the 409 response
pub const NO_CAPACITY_REASON: &str =
    "No available tables for the selected seating and guests.";

/// Whether a time string is one of the bookable slots
pub fn is_allowed_slot(time: &str) -> bool {
    ALLOWED_SLOTS.contains(&time)
}

#[derive(Clone, Debug)]
pub struct TableAllocator {
    tables: DiningTableRepository,
    reservations: ReservationRepository,
}

impl TableAllocator {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            tables: DiningTableRepository::new(db.clone()),
            reservations: ReservationRepository::new(db),
        }
    }

    /// Reserve a table for the request, or fail with `Validation` (400) /
    /// `NoCapacity` (409) / `Database` (500)
    pub async fn reserve(&self, req: ReservationCreate) -> Result<ReservationDetail, AppError> {
        validate_request(&req)?;

        let candidates = self.tables.find_candidates(req.seating, req.guests).await?;
        let booked: HashSet<String> = self
            .reservations
            .booked_table_ids(&req.date, &req.time)
            .await?
            .into_iter()
            .collect();

        for table in candidates {
            let Some(table_id) = table.id.clone() else {
                continue;
            };
            if booked.contains(&table_id.to_string()) {
                continue;
            }

            let row = Reservation {
                id: None,
                first_name: req.first_name.clone(),
                last_name: req.last_name.clone(),
                email: req.email.clone(),
                phone: req.phone.clone(),
                date: req.date.clone(),
                time: req.time.clone(),
                guests: req.guests,
                seating: req.seating,
                special_requests: req.special_requests.clone(),
                occasion: req.occasion.clone(),
                table_id,
                created_at: Utc::now().timestamp_millis(),
            };

            match self.reservations.try_claim(row).await {
                Ok(created) => {
                    tracing::info!(
                        table_number = table.table_number,
                        date = %created.date,
                        time = %created.time,
                        guests = created.guests,
                        "Reservation confirmed"
                    );
                    return Ok(ReservationDetail::from_parts(created, table));
                }
                // Lost the claim race, try the next candidate
                Err(RepoError::SlotTaken) => {
                    tracing::debug!(
                        table_number = table.table_number,
                        "Claim lost race, trying next candidate"
                    );
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }

        tracing::info!(
            seating = %req.seating,
            guests = req.guests,
            date = %req.date,
            time = %req.time,
            "No table available for request"
        );
        Err(AppError::no_capacity(NO_CAPACITY_REASON))
    }

    /// Reservations matching the filter, with nested table info, ordered by
    /// date then time
    pub async fn list(
        &self,
        filter: ReservationFilter,
    ) -> Result<Vec<ReservationDetail>, AppError> {
        Ok(self.reservations.find_detailed(&filter).await?)
    }

    /// Administrative cancellation. Deleting the reservation releases the
    /// slot tuple, so the table becomes bookable for that slot again.
    pub async fn cancel(&self, id: &str) -> Result<Reservation, AppError> {
        let deleted = self.reservations.delete(id).await?;
        tracing::info!(reservation = %id, date = %deleted.date, time = %deleted.time, "Reservation cancelled");
        Ok(deleted)
    }
}

/// Request preconditions: derive-checked fields plus date/slot shape
fn validate_request(req: &ReservationCreate) -> Result<(), AppError> {
    req.validate()
        .map_err(|e| AppError::validation(e.to_string()))?;

    NaiveDate::parse_from_str(&req.date, "%Y-%m-%d")
        .map_err(|_| AppError::validation(format!("date '{}' is not a valid YYYY-MM-DD date", req.date)))?;

    if !is_allowed_slot(&req.time) {
        return Err(AppError::validation(format!(
            "time '{}' is not a bookable slot",
            req.time
        )));
    }

    Ok(())
}
