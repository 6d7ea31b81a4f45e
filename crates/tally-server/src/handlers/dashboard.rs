//! Dashboard handlers

use std::sync::Arc;

use axum::{
    extract::State,
    Json,
};
use serde::Serialize;

use super::Id;
use crate::{AppError, AppState};
use tally_core::{CategoryStats, Dashboard, DashboardResult};

/// Category stats response
#[derive(Serialize)]
pub struct CategoryStatsResponse {
    pub stats: Vec<CategoryStats>,
}

/// GET /api/dashboard/:user_id - Totals, breakdown and insights for a user
pub async fn get_dashboard(
    State(state): State<Arc<AppState>>,
    Id(user_id): Id,
) -> Result<Json<DashboardResult>, AppError> {
    let user = state
        .db
        .get_user(user_id)?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    let dashboard = Dashboard::with_engine(&state.db, &state.db, &state.insights);
    let result = dashboard.build(&user)?;

    Ok(Json(result))
}

/// GET /api/dashboard/categories/:user_id - Expenses grouped by category
pub async fn get_category_stats(
    State(state): State<Arc<AppState>>,
    Id(user_id): Id,
) -> Result<Json<CategoryStatsResponse>, AppError> {
    let dashboard = Dashboard::with_engine(&state.db, &state.db, &state.insights);
    let stats = dashboard.stats(user_id)?;

    Ok(Json(CategoryStatsResponse { stats }))
}
