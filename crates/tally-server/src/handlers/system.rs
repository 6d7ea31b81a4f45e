//! Health check, API index and fallback handlers

use axum::{extract::OriginalUri, http::StatusCode, response::IntoResponse, Json};
use chrono::{DateTime, Utc};
use serde::Serialize;
use serde_json::json;

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub timestamp: DateTime<Utc>,
}

/// GET /api/health - Liveness probe
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        timestamp: Utc::now(),
    })
}

/// GET / - List the available endpoints
pub async fn api_index() -> Json<serde_json::Value> {
    Json(json!({
        "name": "Tally expense tracker API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "auth": {
                "login": "POST /api/auth/login",
                "register": "POST /api/auth/register",
                "getUser": "GET /api/auth/user/:userId"
            },
            "expenses": {
                "getAll": "GET /api/expenses/:userId",
                "getSingle": "GET /api/expenses/single/:id",
                "create": "POST /api/expenses",
                "update": "PUT /api/expenses/:id",
                "delete": "DELETE /api/expenses/:id"
            },
            "dashboard": {
                "getDashboard": "GET /api/dashboard/:userId",
                "getCategoryStats": "GET /api/dashboard/categories/:userId"
            },
            "categories": {
                "getAll": "GET /api/categories",
                "getSingle": "GET /api/categories/:name"
            },
            "health": "GET /api/health"
        }
    }))
}

/// Fallback for unknown /api paths
pub async fn api_not_found(OriginalUri(uri): OriginalUri) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "path": uri.path(),
        })),
    )
}
