//! HTTP-level tests: route visibility, admin guard and error bodies.
//!
//! The full router is exercised with `tower::ServiceExt::oneshot` against
//! a real temp-directory database, so middleware ordering and status codes
//! are tested exactly as deployed.

use axum::Router;
use axum::body::Body;
use http::{Request, StatusCode, header};
use serde_json::{Value, json};
use tempfile::TempDir;
use tower::ServiceExt;

use mesa_server::core::{Config, Server, ServerState};

async fn setup_app() -> (TempDir, Router) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let config = Config::with_overrides(dir.path().to_string_lossy().to_string(), 0);
    let state = ServerState::initialize(&config)
        .await
        .expect("Failed to initialize state");
    let app = Server::build_app(state);
    (dir, app)
}

fn json_request(method: &str, uri: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .expect("Failed to build request")
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .body(Body::empty())
        .expect("Failed to build request")
}

async fn response_json(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("Failed to read body");
    serde_json::from_slice(&bytes).expect("Body is not valid JSON")
}

async fn login(app: &Router) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"username": "admin", "password": "mesa-dev-password"}),
        ))
        .await
        .expect("Login request failed");
    assert_eq!(response.status(), StatusCode::OK);

    let body = response_json(response).await;
    body["token"]
        .as_str()
        .expect("Login response carries a token")
        .to_string()
}

#[tokio::test]
async fn health_and_public_routes_need_no_token() {
    let (_dir, app) = setup_app().await;

    let health = app.clone().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(health.status(), StatusCode::OK);

    let tables = app.clone().oneshot(get_request("/api/tables")).await.unwrap();
    assert_eq!(tables.status(), StatusCode::OK);

    let menu = app.clone().oneshot(get_request("/api/menu")).await.unwrap();
    assert_eq!(menu.status(), StatusCode::OK);

    let testimonials = app
        .clone()
        .oneshot(get_request("/api/testimonials"))
        .await
        .unwrap();
    assert_eq!(testimonials.status(), StatusCode::OK);
}

#[tokio::test]
async fn admin_routes_reject_anonymous_and_bad_tokens() {
    let (_dir, app) = setup_app().await;

    let anonymous = app
        .clone()
        .oneshot(get_request("/api/reservations"))
        .await
        .unwrap();
    assert_eq!(anonymous.status(), StatusCode::UNAUTHORIZED);

    let garbage = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/reservations")
                .header(header::AUTHORIZATION, "Bearer not.a.token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn login_rejects_bad_credentials() {
    let (_dir, app) = setup_app().await;

    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            json!({"username": "admin", "password": "wrong"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let body = response_json(response).await;
    assert_eq!(body["error"], "Invalid username or password");
}

#[tokio::test]
async fn admin_token_unlocks_management_routes() {
    let (_dir, app) = setup_app().await;
    let token = login(&app).await;

    // Create a table through the admin API
    let created = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/tables")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::from(
                    json!({"table_number": 1, "seats": 4, "seating": "indoor"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(created.status(), StatusCode::OK);

    let listed = app
        .clone()
        .oneshot(
            Request::builder()
                .uri("/api/reservations")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(listed.status(), StatusCode::OK);
}

#[tokio::test]
async fn booking_flow_reports_conflict_with_reason() {
    let (_dir, app) = setup_app().await;
    let token = login(&app).await;

    // Seed one 2-seat table
    let seeded = app
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/tables")
                .header(header::CONTENT_TYPE, "application/json")
                .header(header::AUTHORIZATION, format!("Bearer {}", token))
                .body(Body::from(
                    json!({"table_number": 1, "seats": 2, "seating": "indoor"}).to_string(),
                ))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(seeded.status(), StatusCode::OK);

    let booking = json!({
        "first_name": "Maria",
        "last_name": "Santos",
        "email": "maria@example.com",
        "phone": "+351 912 000 111",
        "date": "2026-09-12",
        "time": "19:00",
        "guests": 2,
        "seating": "indoor"
    });

    // First booking wins the table
    let first = app
        .clone()
        .oneshot(json_request("POST", "/api/reservations", booking.clone()))
        .await
        .unwrap();
    assert_eq!(first.status(), StatusCode::CREATED);
    let body = response_json(first).await;
    assert_eq!(body["table"]["table_number"], 1);

    // Second booking for the same slot gets the conflict reason
    let second = app
        .clone()
        .oneshot(json_request("POST", "/api/reservations", booking))
        .await
        .unwrap();
    assert_eq!(second.status(), StatusCode::CONFLICT);
    let body = response_json(second).await;
    assert_eq!(
        body["reason"],
        "No available tables for the selected seating and guests."
    );
}
