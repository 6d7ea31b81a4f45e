//! Category registry handlers

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::{AppError, AppState};
use tally_core::models::Category;

/// Category list response
#[derive(Serialize)]
pub struct CategoryListResponse {
    pub count: usize,
    pub categories: Vec<Category>,
}

/// Single category response
#[derive(Serialize)]
pub struct CategoryResponse {
    pub category: Category,
}

/// GET /api/categories - List categories in registry order
pub async fn list_categories(
    State(state): State<Arc<AppState>>,
) -> Result<Json<CategoryListResponse>, AppError> {
    let categories = state.db.list_categories()?;

    Ok(Json(CategoryListResponse {
        count: categories.len(),
        categories,
    }))
}

/// GET /api/categories/:name - Look up a category (case-sensitive)
pub async fn get_category(
    State(state): State<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<CategoryResponse>, AppError> {
    let category = state
        .db
        .get_category_by_name(&name)?
        .ok_or_else(|| AppError::not_found("Category not found"))?;

    Ok(Json(CategoryResponse { category }))
}
