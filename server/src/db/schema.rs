//! SurrealDB schema definitions
//!
//! Tables are schemaless; indexes carry the invariants:
//! - `uniq_table_number` keeps display numbers unique
//! - `uniq_reservation_slot` is the double-booking guard: at most one
//!   reservation per `(table_id, date, time)` tuple, enforced by the engine
//!   so a concurrent claim loses the race with an index error instead of
//!   silently double-booking

use crate::utils::AppError;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

const STATEMENTS: &[&str] = &[
    "DEFINE TABLE IF NOT EXISTS dining_table SCHEMALESS",
    "DEFINE INDEX IF NOT EXISTS uniq_table_number ON dining_table FIELDS table_number UNIQUE",
    "DEFINE TABLE IF NOT EXISTS reservation SCHEMALESS",
    "DEFINE INDEX IF NOT EXISTS uniq_reservation_slot ON reservation FIELDS table_id, date, time UNIQUE",
    "DEFINE INDEX IF NOT EXISTS idx_reservation_date ON reservation FIELDS date",
    "DEFINE TABLE IF NOT EXISTS menu_item SCHEMALESS",
    "DEFINE TABLE IF NOT EXISTS testimonial SCHEMALESS",
];

/// Apply all schema statements. Idempotent, runs at every startup.
pub async fn apply(db: &Surreal<Db>) -> Result<(), AppError> {
    for stmt in STATEMENTS {
        db.query(*stmt)
            .await
            .map_err(|e| AppError::database(format!("Schema statement failed: {e}")))?
            .check()
            .map_err(|e| AppError::database(format!("Schema statement rejected: {e}")))?;
    }
    Ok(())
}
