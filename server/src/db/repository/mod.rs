//! Repository Module
//!
//! CRUD operations over the SurrealDB tables. Each repository wraps a
//! [`BaseRepository`] holding the shared database handle.

pub mod dining_table;
pub mod menu_item;
pub mod reservation;
pub mod testimonial;

// Re-exports
pub use dining_table::DiningTableRepository;
pub use menu_item::MenuItemRepository;
pub use reservation::ReservationRepository;
pub use testimonial::TestimonialRepository;

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;
use thiserror::Error;

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    /// Another reservation already holds the `(table_id, date, time)` slot
    #[error("Slot already taken")]
    SlotTaken,

    #[error("Database error: {0}")]
    Database(String),

    #[error("Validation error: {0}")]
    Validation(String),
}

impl From<surrealdb::Error> for RepoError {
    fn from(err: surrealdb::Error) -> Self {
        RepoError::Database(err.to_string())
    }
}

impl From<RepoError> for AppError {
    fn from(err: RepoError) -> Self {
        match err {
            RepoError::NotFound(msg) => AppError::NotFound(msg),
            RepoError::Duplicate(msg) => AppError::Conflict(msg),
            RepoError::SlotTaken => AppError::Conflict("Slot already taken".to_string()),
            RepoError::Database(msg) => AppError::Database(msg),
            RepoError::Validation(msg) => AppError::Validation(msg),
        }
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Whether a SurrealDB error is a unique index violation.
///
/// The embedded SDK reports these only as text ("Database index `x` already
/// contains ..."), so string matching is the available signal.
pub(crate) fn is_unique_violation(err: &surrealdb::Error) -> bool {
    err.to_string().contains("already contains")
}

/// Whether a SurrealDB error is a transient engine write conflict that is
/// safe to retry.
pub(crate) fn is_write_conflict(err: &surrealdb::Error) -> bool {
    let msg = err.to_string();
    msg.contains("read or write conflict") || msg.contains("can be retried")
}

/// Base repository with database reference
#[derive(Clone, Debug)]
pub struct BaseRepository {
    db: Surreal<Db>,
}

impl BaseRepository {
    pub fn new(db: Surreal<Db>) -> Self {
        Self { db }
    }

    pub fn db(&self) -> &Surreal<Db> {
        &self.db
    }
}
