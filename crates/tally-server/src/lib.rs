//! Tally Web Server
//!
//! Axum-based REST API for the Tally expense tracker.
//!
//! - Users, expenses and categories backed by the shared SQLite store
//! - Dashboard aggregation with rule-based insights
//! - Restrictive CORS policy and security headers
//! - Sanitized error responses (full errors only with `expose_errors`)

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::{header, HeaderValue, Method, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tower_http::{
    cors::CorsLayer, services::ServeDir, set_header::SetResponseHeaderLayer, trace::TraceLayer,
};
use tracing::{error, info, warn};

use tally_core::db::Database;
use tally_core::insights::{InsightEngine, DEFAULT_CURRENCY_SYMBOL};

mod handlers;

/// Maximum accepted JSON body size (64 KB)
pub const MAX_BODY_SIZE: usize = 64 * 1024;

/// Generic message returned for internal errors
const INTERNAL_ERROR_MESSAGE: &str = "An internal error occurred";

/// Server configuration
#[derive(Clone)]
pub struct ServerConfig {
    /// Allowed CORS origins (empty = same-origin only)
    pub allowed_origins: Vec<String>,
    /// Include internal error details in 500 responses (development only)
    pub expose_errors: bool,
    /// Currency symbol used in insight messages
    pub currency_symbol: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            allowed_origins: vec![],
            expose_errors: false,
            currency_symbol: DEFAULT_CURRENCY_SYMBOL.to_string(),
        }
    }
}

/// Parse a comma-separated list of CORS origins
pub fn parse_allowed_origins(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .filter(|s| {
            let valid = s.parse::<HeaderValue>().is_ok();
            if !valid {
                warn!(origin = *s, "Ignoring invalid CORS origin");
            }
            valid
        })
        .map(String::from)
        .collect()
}

/// Shared application state
pub struct AppState {
    pub db: Database,
    pub config: ServerConfig,
    /// Insight rules applied to every dashboard
    pub insights: InsightEngine,
}

/// Success response
#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: bool,
}

/// Create the application router
pub fn create_router(db: Database, static_dir: Option<&str>, config: ServerConfig) -> Router {
    let insights = InsightEngine::new().with_currency_symbol(&config.currency_symbol);

    let state = Arc::new(AppState {
        db,
        config: config.clone(),
        insights,
    });

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .route("/auth/login", post(handlers::login))
        .route("/auth/register", post(handlers::register))
        .route("/auth/user/:id", get(handlers::get_user))
        .route("/expenses", post(handlers::create_expense))
        // GET takes a user id, PUT and DELETE an expense id
        .route(
            "/expenses/:id",
            get(handlers::list_expenses)
                .put(handlers::update_expense)
                .delete(handlers::delete_expense),
        )
        .route("/expenses/single/:id", get(handlers::get_expense))
        .route("/dashboard/:user_id", get(handlers::get_dashboard))
        .route(
            "/dashboard/categories/:user_id",
            get(handlers::get_category_stats),
        )
        .route("/categories", get(handlers::list_categories))
        .route("/categories/:name", get(handlers::get_category))
        .fallback(handlers::api_not_found);

    let methods = [
        Method::GET,
        Method::POST,
        Method::PUT,
        Method::DELETE,
        Method::OPTIONS,
    ];
    let cors = if config.allowed_origins.is_empty() {
        CorsLayer::new()
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods(methods)
            .allow_headers([header::CONTENT_TYPE])
    };

    // CSP: same-origin scripts, inline styles for the front-end
    let csp_value = HeaderValue::from_static(
        "default-src 'self'; script-src 'self'; style-src 'self' 'unsafe-inline'; img-src 'self' data:; connect-src 'self'; frame-ancestors 'none'",
    );

    let mut app = Router::new().nest("/api", api_routes);

    // Without a front-end the root lists the API
    if static_dir.is_none() {
        app = app.route("/", get(handlers::api_index));
    }

    let mut app = app
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_detail_middleware,
        ))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::CONTENT_SECURITY_POLICY,
            csp_value,
        ));

    // Serve static files if directory provided
    if let Some(dir) = static_dir {
        app = app.fallback_service(ServeDir::new(dir));
    }

    app
}

/// Start the server
pub async fn serve(
    db: Database,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
) -> anyhow::Result<()> {
    serve_with_config(db, host, port, static_dir, ServerConfig::default()).await
}

/// Start the server with custom configuration
pub async fn serve_with_config(
    db: Database,
    host: &str,
    port: u16,
    static_dir: Option<&str>,
    config: ServerConfig,
) -> anyhow::Result<()> {
    if config.expose_errors {
        warn!("⚠️  Error details are exposed in responses - do not expose to network!");
    }
    if db.is_ephemeral() {
        info!("ℹ️  Using a throwaway database seeded with demo data (john / password123)");
    }

    let app = create_router(db, static_dir, config);
    let addr = format!("{}:{}", host, port);

    info!("Starting server at http://{}", addr);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// Attach internal error details to 500 responses when configured
async fn error_detail_middleware(
    State(state): State<Arc<AppState>>,
    request: Request,
    next: Next,
) -> Response {
    let mut response = next.run(request).await;

    match response.extensions_mut().remove::<InternalErrorDetail>() {
        Some(InternalErrorDetail(details)) if state.config.expose_errors => {
            let body = Json(serde_json::json!({
                "error": INTERNAL_ERROR_MESSAGE,
                "details": details,
            }));
            (response.status(), body).into_response()
        }
        _ => response,
    }
}

// ============================================================================
// Error Handling
// ============================================================================

/// Internal error text carried on the response for `error_detail_middleware`
#[derive(Clone)]
struct InternalErrorDetail(String);

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
    internal: Option<anyhow::Error>,
}

impl AppError {
    fn with_status(status: StatusCode, msg: &str) -> Self {
        Self {
            status,
            message: msg.to_string(),
            internal: None,
        }
    }

    pub fn bad_request(msg: &str) -> Self {
        Self::with_status(StatusCode::BAD_REQUEST, msg)
    }

    pub fn unauthorized(msg: &str) -> Self {
        Self::with_status(StatusCode::UNAUTHORIZED, msg)
    }

    pub fn not_found(msg: &str) -> Self {
        Self::with_status(StatusCode::NOT_FOUND, msg)
    }

    pub fn conflict(msg: &str) -> Self {
        Self::with_status(StatusCode::CONFLICT, msg)
    }

    pub fn payload_too_large(msg: &str) -> Self {
        Self::with_status(StatusCode::PAYLOAD_TOO_LARGE, msg)
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // Log the full internal error if present
        if let Some(err) = &self.internal {
            error!(error = %err, "Internal error");
        }

        let body = Json(serde_json::json!({
            "error": self.message
        }));

        let mut response = (self.status, body).into_response();
        if let Some(err) = self.internal {
            response
                .extensions_mut()
                .insert(InternalErrorDetail(format!("{:#}", err)));
        }
        response
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        let err = err.into();

        // Domain errors keep their own status and message
        if let Some(core) = err.downcast_ref::<tally_core::Error>() {
            match core {
                tally_core::Error::InvalidData(msg) => return Self::bad_request(msg),
                tally_core::Error::NotFound(msg) => return Self::not_found(msg),
                tally_core::Error::Conflict(msg) => return Self::conflict(msg),
                _ => {}
            }
        }

        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            // Return generic message to client
            message: INTERNAL_ERROR_MESSAGE.to_string(),
            // Keep full error for logging
            internal: Some(err),
        }
    }
}

#[cfg(test)]
mod tests;
