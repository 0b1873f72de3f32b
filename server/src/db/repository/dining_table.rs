//! Dining Table Repository

use super::{BaseRepository, RepoError, RepoResult, is_unique_violation};
use crate::db::models::{DiningTable, DiningTableCreate, DiningTableUpdate, SeatingType};
use surrealdb::engine::local::Db;
use surrealdb::{RecordId, Surreal};

const TABLE: &str = "dining_table";

#[derive(Clone, Debug)]
pub struct DiningTableRepository {
    base: BaseRepository,
}

impl DiningTableRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self {
            base: BaseRepository::new(db),
        }
    }

    /// Find all dining tables, ordered by display number
    pub async fn find_all(&self) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query("SELECT * FROM dining_table ORDER BY table_number")
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Find table by id
    pub async fn find_by_id(&self, id: &str) -> RepoResult<Option<DiningTable>> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let table: Option<DiningTable> = self.base.db().select(thing).await?;
        Ok(table)
    }

    /// Find table by display number
    pub async fn find_by_number(&self, table_number: i64) -> RepoResult<Option<DiningTable>> {
        let mut result = self
            .base
            .db()
            .query("SELECT * FROM dining_table WHERE table_number = $number LIMIT 1")
            .bind(("number", table_number))
            .await?;
        let tables: Vec<DiningTable> = result.take(0)?;
        Ok(tables.into_iter().next())
    }

    /// Candidate tables for an allocation: matching seating type, enough
    /// seats (`>=`, boundary inclusive) and not administratively blocked.
    /// Ordered by seats ascending so the smallest fitting table wins, with
    /// table number as a stable tie-breaker.
    pub async fn find_candidates(
        &self,
        seating: SeatingType,
        guests: i64,
    ) -> RepoResult<Vec<DiningTable>> {
        let tables: Vec<DiningTable> = self
            .base
            .db()
            .query(
                "SELECT * FROM dining_table \
                 WHERE seating = $seating AND seats >= $guests AND available = true \
                 ORDER BY seats ASC, table_number ASC",
            )
            .bind(("seating", seating.to_string()))
            .bind(("guests", guests))
            .await?
            .take(0)?;
        Ok(tables)
    }

    /// Create a new dining table
    pub async fn create(&self, data: DiningTableCreate) -> RepoResult<DiningTable> {
        // Check duplicate display number first for a friendly message;
        // the unique index still backstops the race
        if self.find_by_number(data.table_number).await?.is_some() {
            return Err(RepoError::Duplicate(format!(
                "Table {} already exists",
                data.table_number
            )));
        }

        let table = DiningTable {
            id: None,
            table_number: data.table_number,
            seats: data.seats,
            seating: data.seating,
            available: data.available.unwrap_or(true),
        };

        let created: Result<Option<DiningTable>, surrealdb::Error> =
            self.base.db().create(TABLE).content(table).await;
        match created {
            Ok(Some(t)) => Ok(t),
            Ok(None) => Err(RepoError::Database(
                "Failed to create dining table".to_string(),
            )),
            Err(e) if is_unique_violation(&e) => Err(RepoError::Duplicate(format!(
                "Table {} already exists",
                data.table_number
            ))),
            Err(e) => Err(e.into()),
        }
    }

    /// Update a dining table
    pub async fn update(&self, id: &str, data: DiningTableUpdate) -> RepoResult<DiningTable> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        let existing = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))?;

        // Check duplicate display number if it changes
        if let Some(number) = data.table_number
            && number != existing.table_number
            && self.find_by_number(number).await?.is_some()
        {
            return Err(RepoError::Duplicate(format!(
                "Table {} already exists",
                number
            )));
        }

        let table_number = data.table_number.unwrap_or(existing.table_number);
        let seats = data.seats.unwrap_or(existing.seats);
        let seating = data.seating.unwrap_or(existing.seating);
        let available = data.available.unwrap_or(existing.available);

        self.base
            .db()
            .query(
                "UPDATE $thing SET table_number = $table_number, seats = $seats, \
                 seating = $seating, available = $available",
            )
            .bind(("thing", thing))
            .bind(("table_number", table_number))
            .bind(("seats", seats))
            .bind(("seating", seating.to_string()))
            .bind(("available", available))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))
    }

    /// Set the administrative block flag. Idempotent; never touches any
    /// reservation.
    pub async fn set_availability(&self, id: &str, available: bool) -> RepoResult<DiningTable> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))?;

        self.base
            .db()
            .query("UPDATE $thing SET available = $available")
            .bind(("thing", thing))
            .bind(("available", available))
            .await?;

        self.find_by_id(id)
            .await?
            .ok_or_else(|| RepoError::NotFound(format!("Dining table {} not found", id)))
    }

    /// Hard delete a dining table
    pub async fn delete(&self, id: &str) -> RepoResult<bool> {
        let thing: RecordId = id
            .parse()
            .map_err(|_| RepoError::Validation(format!("Invalid ID: {}", id)))?;
        self.base
            .db()
            .query("DELETE $thing")
            .bind(("thing", thing))
            .await?;
        Ok(true)
    }
}
