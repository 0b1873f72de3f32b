//! Menu API Handlers

use axum::{
    Json,
    extract::{Path, State},
};
use rust_decimal::Decimal;

use crate::core::ServerState;
use crate::db::models::{MenuItem, MenuItemCreate, MenuItemUpdate};
use crate::db::repository::MenuItemRepository;
use crate::utils::{AppError, AppResult};
use crate::utils::validation::{MAX_NAME_LEN, MAX_NOTE_LEN, validate_required_text};

/// GET /api/menu - active menu items (public)
pub async fn list_active(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_active().await?;
    Ok(Json(items))
}

/// GET /api/menu/all - all menu items including inactive (admin)
pub async fn list_all(State(state): State<ServerState>) -> AppResult<Json<Vec<MenuItem>>> {
    let repo = MenuItemRepository::new(state.get_db());
    let items = repo.find_all().await?;
    Ok(Json(items))
}

/// POST /api/menu - create a menu item (admin)
pub async fn create(
    State(state): State<ServerState>,
    Json(payload): Json<MenuItemCreate>,
) -> AppResult<Json<MenuItem>> {
    validate_required_text(&payload.name, "name", MAX_NAME_LEN)?;
    validate_required_text(&payload.category, "category", MAX_NAME_LEN)?;
    validate_price(payload.price)?;

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.create(payload).await?;
    Ok(Json(item))
}

/// PUT /api/menu/:id - update a menu item (admin)
pub async fn update(
    State(state): State<ServerState>,
    Path(id): Path<String>,
    Json(payload): Json<MenuItemUpdate>,
) -> AppResult<Json<MenuItem>> {
    if let Some(name) = &payload.name {
        validate_required_text(name, "name", MAX_NAME_LEN)?;
    }
    if let Some(description) = &payload.description {
        validate_required_text(description, "description", MAX_NOTE_LEN)?;
    }
    if let Some(price) = payload.price {
        validate_price(price)?;
    }

    let repo = MenuItemRepository::new(state.get_db());
    let item = repo.update(&id, payload).await?;
    Ok(Json(item))
}

/// DELETE /api/menu/:id - delete a menu item (admin)
pub async fn delete(
    State(state): State<ServerState>,
    Path(id): Path<String>,
) -> AppResult<Json<bool>> {
    let repo = MenuItemRepository::new(state.get_db());
    let result = repo.delete(&id).await?;
    Ok(Json(result))
}

fn validate_price(price: Decimal) -> AppResult<()> {
    if price.is_sign_negative() {
        return Err(AppError::validation("price must not be negative"));
    }
    Ok(())
}
