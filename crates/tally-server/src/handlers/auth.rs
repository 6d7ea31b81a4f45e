//! Login, registration and user lookup handlers

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::StatusCode,
    Json,
};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::{non_blank, read_json, Id};
use crate::{AppError, AppState};
use tally_core::models::{NewUser, User};

/// Request body for POST /api/auth/login
#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Request body for POST /api/auth/register
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub username: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
    pub email: Option<String>,
    pub income: Option<f64>,
}

/// Wraps a user for auth responses
#[derive(Serialize)]
pub struct UserResponse {
    pub user: User,
}

/// POST /api/auth/login - Check credentials and return the user
pub async fn login(
    State(state): State<Arc<AppState>>,
    body: Body,
) -> Result<Json<UserResponse>, AppError> {
    let req: LoginRequest = read_json(body).await?;

    let (Some(username), Some(password)) = (non_blank(req.username), non_blank(req.password))
    else {
        return Err(AppError::bad_request("Username and password are required"));
    };

    let user = state
        .db
        .verify_credentials(&username, &password)?
        .ok_or_else(|| AppError::unauthorized("Invalid username or password"))?;

    info!(user_id = user.id, username = %user.username, "User logged in");

    Ok(Json(UserResponse { user }))
}

/// POST /api/auth/register - Create a new user
pub async fn register(
    State(state): State<Arc<AppState>>,
    body: Body,
) -> Result<(StatusCode, Json<UserResponse>), AppError> {
    let req: RegisterRequest = read_json(body).await?;

    let (Some(username), Some(password), Some(name)) = (
        non_blank(req.username),
        non_blank(req.password),
        non_blank(req.name),
    ) else {
        return Err(AppError::bad_request(
            "Username, password, and name are required",
        ));
    };

    let income = req.income.unwrap_or(0.0);
    if !income.is_finite() || income < 0.0 {
        return Err(AppError::bad_request("Income must be a non-negative number"));
    }

    // Duplicate usernames surface as Conflict (409)
    let user = state.db.create_user(&NewUser {
        username,
        password,
        name,
        email: req.email.unwrap_or_default(),
        income,
    })?;

    Ok((StatusCode::CREATED, Json(UserResponse { user })))
}

/// GET /api/auth/user/:id - Get a user by ID
pub async fn get_user(
    State(state): State<Arc<AppState>>,
    Id(id): Id,
) -> Result<Json<UserResponse>, AppError> {
    let user = state
        .db
        .get_user(id)?
        .ok_or_else(|| AppError::not_found("User not found"))?;

    Ok(Json(UserResponse { user }))
}
