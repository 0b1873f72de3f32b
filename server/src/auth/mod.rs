//! Authentication
//!
//! JWT token service, admin credentials and the Axum middleware that ties
//! them into the router.

pub mod credentials;
pub mod jwt;
pub mod middleware;

pub use credentials::AdminCredentials;
pub use jwt::{Claims, CurrentUser, JwtConfig, JwtError, JwtService};
pub use middleware::{authenticate, require_admin};
