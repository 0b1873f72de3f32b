//! Server lifecycle errors

use thiserror::Error;

/// Errors raised while starting or running the server
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Database initialization failed: {0}")]
    Database(#[from] surrealdb::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<crate::utils::AppError> for ServerError {
    fn from(e: crate::utils::AppError) -> Self {
        Self::Internal(anyhow::Error::new(e))
    }
}

pub type Result<T> = std::result::Result<T, ServerError>;
