//! Testimonial API Handlers

use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};

use crate::core::ServerState;
use crate::db::models::{Testimonial, TestimonialCreate};
use crate::db::repository::TestimonialRepository;
use crate::utils::AppResult;
use crate::utils::validation::{
    MAX_NAME_LEN, MAX_NOTE_LEN, validate_range, validate_required_text,
};

/// GET /api/testimonials - approved testimonials (public)
pub async fn list_approved(State(state): State<ServerState>) -> AppResult<Json<Vec<Testimonial>>> {
    let repo = TestimonialRepository::new(state.get_db());
    let testimonials = repo.find_approved().await?;
    Ok(Json(testimonials))
}

/// GET /api/testimonials/all - every testimonial, pending included (admin)
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<Testimonial>>> {
    let repo = TestimonialRepository::new(state.get_db());
    let testimonials = repo.find_all().await?;
    Ok(Json(testimonials))
}

/// POST /api/testimonials - submit a testimonial (public)
///
/// Submissions start unapproved and stay invisible to the public list
/// until an administrator approves them.
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<TestimonialCreate>,
) -> AppResult<(StatusCode, Json<Testimonial>)> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.comment, "comment", MAX_NOTE_LEN)?;
    validate_range(payload.rating, "rating", 1, 5)?;

    let repo = TestimonialRepository::new(state.get_db());
    let testimonial = repo.create(payload).await?;
    Ok((StatusCode::CREATED, Json(testimonial)))
}

/// PATCH /api/testimonials/:id/approve - approve a testimonial (admin)
pub async fn approve(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<Testimonial>> {
    let repo = TestimonialRepository::new(state.get_db());
    let testimonial = repo.approve(&id).await?;
    Ok(Json(testimonial))
}

/// DELETE /api/testimonials/:id - delete a testimonial (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = TestimonialRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}
