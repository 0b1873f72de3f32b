//! Reservation Repository
//!
//! Holds the claim primitive the allocator builds on: inserting a
//! reservation row is the atomic "mark this table taken for this slot"
//! operation, guarded by the unique `(table_id, date, time)` index.

use super::{BaseRepository, RepoError, RepoResult, is_unique_violation, is_write_conflict};
use crate::db::models::{DiningTable, Reservation, ReservationDetail, ReservationFilter};
use std::collections::HashMap;
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "reservation";

/// Transient engine write conflicts get this many retries before giving up.
const CLAIM_RETRIES: usize = 3;

#[derive(Clone, Debug)]
pub struct ReservationRepository {
    base: BaseRepository,
}

impl ReservationRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Attempt to claim a slot by inserting the reservation row.
    ///
    /// Returns [`RepoError::SlotTaken`] when another reservation already
    /// holds `(table_id, date, time)` — the caller moves on to the next
    /// candidate table. Engine write conflicts are retried on the same row.
    pub async fn try_claim(&self, reservation: Reservation) -> RepoResult<Reservation> {
        let mut attempt = 0;
        loop {
            let created: Result<Option<Reservation>, surrealdb::Error> = self
                .base
                .db()
                .create(TABLE)
                .content(reservation.clone())
                .await;

            match created {
                Ok(Some(r)) => return Ok(r),
                Ok(None) => {
                    return Err(RepoError::Database(
                        "Failed to create reservation".to_string(),
                    ));
                }
                Err(e) if is_unique_violation(&e) => return Err(RepoError::SlotTaken),
                Err(e) if is_write_conflict(&e) && attempt < CLAIM_RETRIES => {
                    attempt += 1;
                    continue;
                }
                Err(e) => return Err(e.into()),
            }
        }
    }

    /// Table ids (as "dining_table:id" strings) already booked for the
    /// given slot
    pub async fn booked_table_ids(&self, date: &str, time: &str) -> RepoResult<Vec<String>> {
        let ids: Vec<String> = self
            .base
            .db()
            .query("SELECT VALUE table_id FROM reservation WHERE date = $date AND time = $time")
            .bind(("date", date.to_string()))
            .bind(("time", time.to_string()))
            .await?
            .take(0)?;
        Ok(ids)
    }

    /// Reservations matching the filter, joined with their tables, ordered
    /// by date then time
    pub async fn find_detailed(
        &self,
        filter: &ReservationFilter,
    ) -> RepoResult<Vec<ReservationDetail>> {
        let mut sql = String::from("SELECT * FROM reservation");
        let mut clauses: Vec<&str> = Vec::new();
        if filter.date.is_some() {
            clauses.push("date = $date");
        }
        if filter.time.is_some() {
            clauses.push("time = $time");
        }
        if !clauses.is_empty() {
            sql.push_str(" WHERE ");
            sql.push_str(&clauses.join(" AND "));
        }
        sql.push_str(" ORDER BY date ASC, time ASC");

        let mut query = self.base.db().query(sql);
        if let Some(date) = &filter.date {
            query = query.bind(("date", date.clone()));
        }
        if let Some(time) = &filter.time {
            query = query.bind(("time", time.clone()));
        }

        let reservations: Vec<Reservation> = query.await?.take(0)?;

        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table")
            .await?
            .take(0)?;
        let by_id: HashMap<String, DiningTable> = tables
            .into_iter()
            .filter_map(|t| t.id.as_ref().map(|id| (id.to_string(), t.clone())))
            .collect();

        reservations
            .into_iter()
            .map(|r| {
                let key = r.table_id.to_string();
                by_id
                    .get(&key)
                    .cloned()
                    .map(|table| ReservationDetail::from_parts(r, table))
                    .ok_or_else(|| {
                        RepoError::Database(format!("Reservation references missing table {}", key))
                    })
            })
            .collect()
    }

    /// Find reservation by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<Reservation>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let reservation: Option<Reservation> = self.base.db().select(thing).await?;
        Ok(reservation)
    }

    /// Delete a reservation, releasing its slot tuple
    pub async fn delete(&self, id: &str) -> RepoResult<Reservation> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let deleted: Option<Reservation> = self.base.db().delete(thing).await?;
        deleted.ok_or_else(|| RepoError::NotFound(format!("Reservation {} not found", id)))
    }

    /// Whether any reservation still references the given table
    pub async fn exists_for_table(&self, table_id: &RecordId) -> RepoResult<bool> {
        let ids: Vec<String> = self
            .base
            .db()
            .query("SELECT VALUE table_id FROM reservation WHERE table_id = $table_id LIMIT 1")
            .bind(("table_id", table_id.to_string()))
            .await?
            .take(0)?;
        Ok(!ids.is_empty())
    }
}
