//! Testimonial API module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/testimonials", routes())
}

fn routes() -> Router<ServerState> {
    let public_routes = Router::new()
        .route("/", get(handler::list_approved))
        .route("/", axum::routing::post(handler::create));

    let admin_routes = Router::new()
        .route("/all", get(handler::list_all))
        .route("/{id}/approve", axum::routing::patch(handler::approve))
        .route("/{id}", axum::routing::delete(handler::delete))
        .layer(middleware::from_fn(require_admin));

    public_routes.merge(admin_routes)
}
