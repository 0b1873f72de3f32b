use std::sync::Arc;
use surrealdb::Surreal;
use surrealdb::engine::local::Db;

use crate::allocator::TableAllocator;
use crate::auth::{AdminCredentials, JwtService};
use crate::core::{Config, Result};
use crate::db::DbService;
use crate::notify::Notifier;

/// Server state shared across handlers
///
/// Cloning is shallow; the database handle and the Arc-wrapped services
/// make state cheap to pass into every request.
///
/// | Field | Purpose |
/// |-------|---------|
/// | config | Immutable configuration |
/// | db | Embedded SurrealDB handle |
/// | allocator | Reservation table allocation service |
/// | jwt_service | Token generation and validation |
/// | admin | Hashed administrator credentials |
/// | notifier | Confirmation webhook delivery |
#[derive(Clone, Debug)]
pub struct ServerState {
    pub config: Config,
    pub db: Surreal<Db>,
    pub allocator: TableAllocator,
    pub jwt_service: Arc<JwtService>,
    pub admin: Arc<AdminCredentials>,
    pub notifier: Notifier,
}

impl ServerState {
    /// Initialize everything the server needs, in order:
    ///
    /// 1. working directory layout
    /// 2. embedded database (work_dir/database/mesa.db) and schema
    /// 3. allocator, JWT service, admin credentials, notifier
    pub async fn initialize(config: &Config) -> Result<Self> {
        config.ensure_work_dir_structure()?;

        let db_path = config.database_dir().join("mesa.db");
        let db_service = DbService::new(&db_path).await?;
        let db = db_service.db;

        let allocator = TableAllocator::new(db.clone());
        let jwt_service = Arc::new(JwtService::with_config(config.jwt.clone()));
        let admin = Arc::new(AdminCredentials::new(
            config.admin_username.clone(),
            &config.admin_password,
        )?);
        let notifier = Notifier::new(config.notify_webhook_url.clone());

        Ok(Self {
            config: config.clone(),
            db,
            allocator,
            jwt_service,
            admin,
            notifier,
        })
    }

    pub fn get_db(&self) -> Surreal<Db> {
        self.db.clone()
    }
}
