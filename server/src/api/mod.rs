//! HTTP API
//!
//! Route modules, one per resource. Each module exposes a `router()`
//! merged into the application in [`crate::core::Server::build_app`].
//! Administrative route groups carry the [`crate::auth::require_admin`]
//! layer; everything else is public.

pub mod auth;
pub mod health;
pub mod menu;
pub mod reservations;
pub mod tables;
pub mod testimonials;
