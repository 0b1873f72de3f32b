//! Dining Table API module

mod handler;

use axum::{Router, middleware, routing::get};

use crate::auth::require_admin;
use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().nest("/api/tables", routes())
}

fn routes() -> Router<ServerState> {
    let public_routes = Router::new().route("/", get(handler::list));

    let admin_routes = Router::new()
        .route("/", axum::routing::post(handler::create))
        .route(
            "/{id}",
            axum::routing::put(handler::update)
                .patch(handler::set_availability)
                .delete(handler::delete),
        )
        .layer(middleware::from_fn(require_admin));

    public_routes.merge(admin_routes)
}
