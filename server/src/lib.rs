//! Mesa Server - restaurant reservation and content backend
//!
//! # Overview
//!
//! A single-binary HTTP service backing a restaurant site:
//!
//! - **Reservations** (`allocator`): assigns the smallest fitting table to
//!   each booking request; the unique slot index in the embedded database
//!   makes concurrent claims safe
//! - **Database** (`db`): embedded SurrealDB storage with repositories per
//!   entity
//! - **Auth** (`auth`): single-admin JWT + Argon2 authentication
//! - **HTTP API** (`api`): public booking/content routes plus
//!   admin-guarded management routes
//! - **Notifications** (`notify`): fire-and-forget confirmation webhook
//!
//! # Module layout
//!
//! ```text
//! server/src/
//! ├── core/        # config, state, server lifecycle
//! ├── api/         # HTTP routes and handlers
//! ├── allocator/   # table allocation core
//! ├── auth/        # JWT, credentials, middleware
//! ├── db/          # models, repositories, schema
//! ├── notify/      # confirmation webhook
//! └── utils/       # errors, logging, validation
//! ```

pub mod allocator;
pub mod api;
pub mod auth;
pub mod core;
pub mod db;
pub mod notify;
pub mod utils;

pub use allocator::TableAllocator;
pub use auth::{CurrentUser, JwtService};
pub use core::{Config, Server, ServerState};
pub use utils::{AppError, AppResult};

pub use utils::logger::{init_logger, init_logger_with_file};

pub fn print_banner() {
    println!(
        r#"
   __  ___
  /  |/  /__  _________ _
 / /|_/ / _ \/ ___/ __ `/
/ /  / /  __(__  ) /_/ /
/_/  /_/\___/____/\__,_/
    "#
    );
}
