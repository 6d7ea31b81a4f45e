//! Expense CRUD handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::StatusCode,
    Json,
};
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{non_blank, read_json, Id};
use crate::{AppError, AppState, SuccessResponse};
use tally_core::models::{Expense, ExpenseUpdate, NewExpense};

/// Request body for POST /api/expenses
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExpenseRequest {
    pub user_id: Option<i64>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub description: Option<String>,
    /// YYYY-MM-DD
    pub date: Option<String>,
}

/// Expense list response
#[derive(Serialize)]
pub struct ExpenseListResponse {
    pub count: usize,
    pub expenses: Vec<Expense>,
}

/// Single expense response
#[derive(Serialize)]
pub struct ExpenseResponse {
    pub expense: Expense,
}

fn parse_date(value: &str) -> Result<NaiveDate, AppError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .map_err(|_| AppError::bad_request("Invalid date format (expected YYYY-MM-DD)"))
}

/// GET /api/expenses/:user_id - List a user's expenses, newest first
pub async fn list_expenses(
    State(state): State<Arc<AppState>>,
    Id(user_id): Id,
) -> Result<Json<ExpenseListResponse>, AppError> {
    let expenses = state.db.list_expenses_for_user(user_id)?;

    Ok(Json(ExpenseListResponse {
        count: expenses.len(),
        expenses,
    }))
}

/// GET /api/expenses/single/:id - Get one expense
pub async fn get_expense(
    State(state): State<Arc<AppState>>,
    Id(id): Id,
) -> Result<Json<ExpenseResponse>, AppError> {
    let expense = state
        .db
        .get_expense(id)?
        .ok_or_else(|| AppError::not_found("Expense not found"))?;

    Ok(Json(ExpenseResponse { expense }))
}

/// POST /api/expenses - Record a new expense
pub async fn create_expense(
    State(state): State<Arc<AppState>>,
    body: Body,
) -> Result<(StatusCode, Json<ExpenseResponse>), AppError> {
    let req: CreateExpenseRequest = read_json(body).await?;

    let (Some(user_id), Some(category), Some(amount), Some(description), Some(date)) = (
        req.user_id,
        non_blank(req.category),
        req.amount,
        non_blank(req.description),
        non_blank(req.date),
    ) else {
        return Err(AppError::bad_request(
            "All fields are required (userId, category, amount, description, date)",
        ));
    };

    if amount.is_nan() || amount <= 0.0 {
        return Err(AppError::bad_request("Amount must be greater than 0"));
    }

    let new_expense = NewExpense {
        user_id,
        category,
        amount,
        description,
        date: parse_date(&date)?,
    };

    // Unknown users surface as NotFound (404)
    let expense = state.db.create_expense(&new_expense)?;

    Ok((StatusCode::CREATED, Json(ExpenseResponse { expense })))
}

/// PUT /api/expenses/:id - Apply a partial update
pub async fn update_expense(
    State(state): State<Arc<AppState>>,
    Id(id): Id,
    body: Body,
) -> Result<Json<ExpenseResponse>, AppError> {
    let update: ExpenseUpdate = read_json(body).await?;

    // Invalid fields surface as InvalidData (400)
    let expense = state
        .db
        .update_expense(id, &update)?
        .ok_or_else(|| AppError::not_found("Expense not found"))?;

    Ok(Json(ExpenseResponse { expense }))
}

/// DELETE /api/expenses/:id - Delete an expense
pub async fn delete_expense(
    State(state): State<Arc<AppState>>,
    Id(id): Id,
) -> Result<Json<SuccessResponse>, AppError> {
    if !state.db.delete_expense(id)? {
        return Err(AppError::not_found("Expense not found"));
    }

    Ok(Json(SuccessResponse { success: true }))
}
