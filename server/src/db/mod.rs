//! Database Module
//!
//! Embedded SurrealDB (RocksDB engine) plus schema definitions and
//! per-entity repositories.

pub mod models;
pub mod repository;
pub mod schema;

use crate::utils::AppError;
use std::path::Path;
use surrealdb::Surreal;
use surrealdb::engine::local::{Db, RocksDb};

const NAMESPACE: &str = "mesa";
const DATABASE: &str = "mesa";

/// Database service — owns the embedded SurrealDB handle
#[derive(Clone, Debug)]
pub struct DbService {
    pub db: Surreal<Db>,
}

impl DbService {
    /// Open (or create) the embedded database and apply schema definitions
    pub async fn new(db_path: &Path) -> Result<Self, AppError> {
        let db: Surreal<Db> = Surreal::new::<RocksDb>(db_path)
            .await
            .map_err(|e| AppError::database(format!("Failed to open database: {e}")))?;

        db.use_ns(NAMESPACE)
            .use_db(DATABASE)
            .await
            .map_err(|e| AppError::database(format!("Failed to select namespace: {e}")))?;

        schema::apply(&db).await?;

        tracing::info!(path = %db_path.display(), "Database opened (SurrealDB embedded)");

        Ok(Self { db })
    }
}
