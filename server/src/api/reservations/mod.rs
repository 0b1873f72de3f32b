//! Reservation API module

mod handler;

use axum::{Router, middleware, routing::{delete, get, post}};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/reservations", routes())
}

fn routes() -> Router<ServerState> {
    let public_routes = Router::new().route("/", post(handler::create));

    let admin_routes = Router::new()
        .route("/", get(handler::list))
        .route("/{id}", delete(handler::cancel))
        .layer(middleware::from_fn(require_admin));

    public_routes.merge(admin_routes)
}
