//! Utility module - common helpers and types
//!
//! - [`AppError`] / [`AppResult`] - application error taxonomy
//! - [`logger`] - tracing setup
//! - [`validation`] - text/range validation helpers

pub mod error;
pub mod logger;
pub mod validation;

pub use error::{AppError, AppResult, ErrorBody};
