//! Server API tests

use super::*;
use axum::{
    body::Body,
    http::{Request, StatusCode},
};
use http_body_util::BodyExt;
use tally_core::db::Database;
use tempfile::TempDir;
use tower::ServiceExt;

fn setup_test_db() -> Database {
    let db = Database::in_memory().unwrap();
    db.seed_demo_data().unwrap();
    db
}

fn setup_test_app() -> Router {
    create_router(setup_test_db(), None, ServerConfig::default())
}

async fn get_body_json(response: axum::response::Response) -> serde_json::Value {
    let body = response.into_body();
    let bytes = body.collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

fn john_id(db: &Database) -> i64 {
    db.get_user_by_username("john").unwrap().unwrap().id
}

// ========== System Tests ==========

#[tokio::test]
async fn test_health() {
    let app = setup_test_app();

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["status"], "ok");
    assert!(json["timestamp"].is_string());
}

#[tokio::test]
async fn test_api_index() {
    let app = setup_test_app();

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["endpoints"]["dashboard"]["getDashboard"], "GET /api/dashboard/:userId");
}

#[tokio::test]
async fn test_unknown_api_path() {
    let app = setup_test_app();

    let response = app.oneshot(get_request("/api/nope/at/all")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Endpoint not found");
    assert_eq!(json["path"], "/api/nope/at/all");
}

#[tokio::test]
async fn test_security_headers() {
    let app = setup_test_app();

    let response = app.oneshot(get_request("/api/health")).await.unwrap();
    let headers = response.headers();
    assert_eq!(headers.get("x-content-type-options").unwrap(), "nosniff");
    assert_eq!(headers.get("x-frame-options").unwrap(), "DENY");
    assert!(headers.get("content-security-policy").is_some());
}

#[tokio::test]
async fn test_static_dir_serves_root() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>tally</h1>").unwrap();

    let app = create_router(
        setup_test_db(),
        dir.path().to_str(),
        ServerConfig::default(),
    );

    let response = app.oneshot(get_request("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    assert_eq!(&bytes[..], b"<h1>tally</h1>");
}

// ========== Auth Tests ==========

#[tokio::test]
async fn test_login_success() {
    let app = setup_test_app();

    let body = serde_json::json!({"username": "john", "password": "password123"});
    let response = app
        .oneshot(json_request("POST", "/api/auth/login", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["user"]["username"], "john");
    assert_eq!(json["user"]["income"], 60000.0);
    assert!(json["user"].get("password").is_none());
}

#[tokio::test]
async fn test_login_wrong_password() {
    let app = setup_test_app();

    let body = serde_json::json!({"username": "john", "password": "nope"});
    let response = app
        .oneshot(json_request("POST", "/api/auth/login", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Invalid username or password");
}

#[tokio::test]
async fn test_login_missing_fields() {
    let app = setup_test_app();

    let body = serde_json::json!({"username": "john"});
    let response = app
        .oneshot(json_request("POST", "/api/auth/login", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_login_invalid_json() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from("{not json"))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Invalid JSON");
}

#[tokio::test]
async fn test_oversized_body_rejected() {
    let app = setup_test_app();

    let padding = "x".repeat(MAX_BODY_SIZE * 4);
    let response = app
        .oneshot(json_request(
            "POST",
            "/api/auth/login",
            serde_json::json!({"username": "john", "password": padding}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::PAYLOAD_TOO_LARGE);

    let json = get_body_json(response).await;
    assert!(json["error"].as_str().unwrap().contains("too large"));
}

#[tokio::test]
async fn test_register_and_duplicate() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "username": "priya",
        "password": "pw",
        "name": "Priya",
        "income": 45000
    });

    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/auth/register", body.clone()))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_body_json(response).await;
    assert_eq!(json["user"]["name"], "Priya");
    assert_eq!(json["user"]["email"], "");
    assert_eq!(json["user"]["income"], 45000.0);

    let response = app
        .oneshot(json_request("POST", "/api/auth/register", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[tokio::test]
async fn test_register_requires_name() {
    let app = setup_test_app();

    let body = serde_json::json!({"username": "x", "password": "y", "name": "  "});
    let response = app
        .oneshot(json_request("POST", "/api/auth/register", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_get_user() {
    let db = setup_test_db();
    let id = john_id(&db);
    let app = create_router(db, None, ServerConfig::default());

    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/auth/user/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["user"]["id"], id);

    let response = app.oneshot(get_request("/api/auth/user/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Expense Tests ==========

#[tokio::test]
async fn test_list_expenses() {
    let db = setup_test_db();
    let id = john_id(&db);
    let app = create_router(db, None, ServerConfig::default());

    let response = app
        .oneshot(get_request(&format!("/api/expenses/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["count"], 10);
    let expenses = json["expenses"].as_array().unwrap();
    assert_eq!(expenses[0]["description"], "Lunch with colleagues");
    assert_eq!(expenses[0]["userId"], id);
    assert_eq!(expenses[0]["date"], "2024-01-15");
}

#[tokio::test]
async fn test_list_expenses_unknown_user_is_empty() {
    let app = setup_test_app();

    let response = app.oneshot(get_request("/api/expenses/424242")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["count"], 0);
}

#[tokio::test]
async fn test_expense_lifecycle() {
    let db = setup_test_db();
    let id = john_id(&db);
    let app = create_router(db, None, ServerConfig::default());

    let body = serde_json::json!({
        "userId": id,
        "category": "Transport",
        "amount": 250,
        "description": "Metro card",
        "date": "2024-03-01"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/expenses", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = get_body_json(response).await;
    let expense_id = json["expense"]["id"].as_i64().unwrap();
    assert_eq!(json["expense"]["icon"], "🚕");

    // Single fetch
    let response = app
        .clone()
        .oneshot(get_request(&format!("/api/expenses/single/{}", expense_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Partial update keeps untouched fields
    let response = app
        .clone()
        .oneshot(json_request(
            "PUT",
            &format!("/api/expenses/{}", expense_id),
            serde_json::json!({"amount": 300}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["expense"]["amount"], 300.0);
    assert_eq!(json["expense"]["description"], "Metro card");

    // Delete, then it is gone
    let response = app
        .clone()
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri(format!("/api/expenses/{}", expense_id))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["success"], true);

    let response = app
        .oneshot(get_request(&format!("/api/expenses/single/{}", expense_id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_create_expense_validation() {
    let db = setup_test_db();
    let id = john_id(&db);
    let app = create_router(db, None, ServerConfig::default());

    // Missing description
    let body = serde_json::json!({
        "userId": id,
        "category": "Food",
        "amount": 10,
        "date": "2024-03-01"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/expenses", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);

    // Negative amount
    let body = serde_json::json!({
        "userId": id,
        "category": "Food",
        "amount": -5,
        "description": "Refund?",
        "date": "2024-03-01"
    });
    let response = app
        .clone()
        .oneshot(json_request("POST", "/api/expenses", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    let json = get_body_json(response).await;
    assert_eq!(json["error"], "Amount must be greater than 0");

    // Bad date
    let body = serde_json::json!({
        "userId": id,
        "category": "Food",
        "amount": 5,
        "description": "Snack",
        "date": "01/03/2024"
    });
    let response = app
        .oneshot(json_request("POST", "/api/expenses", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_create_expense_unknown_user() {
    let app = setup_test_app();

    let body = serde_json::json!({
        "userId": 9999,
        "category": "Food",
        "amount": 5,
        "description": "Snack",
        "date": "2024-03-01"
    });
    let response = app
        .oneshot(json_request("POST", "/api/expenses", body))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_missing_expense() {
    let app = setup_test_app();

    let response = app
        .oneshot(json_request(
            "PUT",
            "/api/expenses/9999",
            serde_json::json!({"description": "ghost"}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_update_rejects_zero_amount() {
    let db = setup_test_db();
    let id = john_id(&db);
    let expense_id = db.list_expenses_for_user(id).unwrap()[0].id;
    let app = create_router(db, None, ServerConfig::default());

    let response = app
        .oneshot(json_request(
            "PUT",
            &format!("/api/expenses/{}", expense_id),
            serde_json::json!({"amount": 0}),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_delete_missing_expense() {
    let app = setup_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .method("DELETE")
                .uri("/api/expenses/9999")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Dashboard Tests ==========

#[tokio::test]
async fn test_get_dashboard() {
    let db = setup_test_db();
    let id = john_id(&db);
    let app = create_router(db, None, ServerConfig::default());

    let response = app
        .oneshot(get_request(&format!("/api/dashboard/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["income"], 60000.0);
    assert_eq!(json["totalSpent"], 19199.0);
    assert_eq!(json["budgetLeft"], 40801.0);
    assert_eq!(json["savingsRate"], 68.0);
    assert_eq!(json["emergencyFund"], 360000.0);
    assert_eq!(json["totalExpenses"], 10);

    let breakdown = json["categoryBreakdown"].as_array().unwrap();
    assert_eq!(breakdown[0]["category"], "Food");
    assert_eq!(breakdown[0]["transactionCount"], 3);

    let insights = json["insights"].as_array().unwrap();
    assert_eq!(insights.len(), 2);
    assert_eq!(insights[0]["type"], "success");
    assert_eq!(insights[1]["type"], "info");
}

#[tokio::test]
async fn test_dashboard_unknown_user() {
    let app = setup_test_app();

    let response = app.oneshot(get_request("/api/dashboard/9999")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);

    let json = get_body_json(response).await;
    assert_eq!(json["error"], "User not found");
}

#[tokio::test]
async fn test_non_numeric_ids_return_json_errors() {
    let app = setup_test_app();

    for (method, uri) in [
        ("GET", "/api/dashboard/abc"),
        ("GET", "/api/dashboard/categories"),
        ("GET", "/api/auth/user/abc"),
        ("GET", "/api/expenses/abc"),
        ("GET", "/api/expenses/single/abc"),
        ("DELETE", "/api/expenses/abc"),
    ] {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .unwrap();
        let response = app.clone().oneshot(request).await.unwrap();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST, "{} {}", method, uri);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "application/json",
            "{} {}",
            method,
            uri
        );

        let json = get_body_json(response).await;
        assert_eq!(json["error"], "Invalid id (expected an integer)");
    }
}

#[tokio::test]
async fn test_dashboard_currency_symbol() {
    let db = setup_test_db();
    let id = john_id(&db);
    let config = ServerConfig {
        currency_symbol: "$".to_string(),
        ..Default::default()
    };
    let app = create_router(db, None, config);

    let response = app
        .oneshot(get_request(&format!("/api/dashboard/{}", id)))
        .await
        .unwrap();
    let json = get_body_json(response).await;
    let message = json["insights"][1]["message"].as_str().unwrap();
    assert!(message.contains("$360,000"), "got: {}", message);
}

#[tokio::test]
async fn test_category_stats() {
    let db = setup_test_db();
    let id = john_id(&db);
    let app = create_router(db, None, ServerConfig::default());

    let response = app
        .oneshot(get_request(&format!("/api/dashboard/categories/{}", id)))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    let stats = json["stats"].as_array().unwrap();
    assert_eq!(stats.len(), 6);
    assert_eq!(stats[0]["category"], "Food");
    assert_eq!(stats[0]["count"], 3);
    assert_eq!(stats[0]["expenses"].as_array().unwrap().len(), 3);
}

// ========== Category Tests ==========

#[tokio::test]
async fn test_list_categories() {
    let app = setup_test_app();

    let response = app.oneshot(get_request("/api/categories")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let json = get_body_json(response).await;
    assert_eq!(json["count"], 6);
    assert_eq!(json["categories"][0]["name"], "Food");
    assert_eq!(json["categories"][0]["color"], "#ef4444");
}

#[tokio::test]
async fn test_get_category() {
    let app = setup_test_app();

    let response = app.clone().oneshot(get_request("/api/categories/Bills")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let json = get_body_json(response).await;
    assert_eq!(json["category"]["icon"], "💡");

    // Lookup is case-sensitive
    let response = app.oneshot(get_request("/api/categories/bills")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

// ========== Error Handling Tests ==========

async fn failing_handler() -> Result<Json<SuccessResponse>, AppError> {
    Err(anyhow::anyhow!("disk on fire").into())
}

fn failing_app(expose_errors: bool) -> Router {
    let state = Arc::new(AppState {
        db: Database::in_memory().unwrap(),
        config: ServerConfig {
            expose_errors,
            ..Default::default()
        },
        insights: InsightEngine::new(),
    });

    Router::new()
        .route("/boom", axum::routing::get(failing_handler))
        .layer(middleware::from_fn_with_state(
            state.clone(),
            error_detail_middleware,
        ))
        .with_state(state)
}

#[tokio::test]
async fn test_internal_errors_are_sanitized() {
    let response = failing_app(false).oneshot(get_request("/boom")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = get_body_json(response).await;
    assert_eq!(json["error"], "An internal error occurred");
    assert!(json.get("details").is_none());
}

#[tokio::test]
async fn test_internal_errors_exposed_in_dev() {
    let response = failing_app(true).oneshot(get_request("/boom")).await.unwrap();
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let json = get_body_json(response).await;
    assert_eq!(json["details"], "disk on fire");
}

#[test]
fn test_core_errors_map_to_status() {
    let err: AppError = tally_core::Error::Conflict("taken".to_string()).into();
    assert_eq!(err.status(), StatusCode::CONFLICT);

    let err: AppError = tally_core::Error::InvalidData("bad".to_string()).into();
    assert_eq!(err.status(), StatusCode::BAD_REQUEST);

    let err: AppError = tally_core::Error::NotFound("gone".to_string()).into();
    assert_eq!(err.status(), StatusCode::NOT_FOUND);
}

#[test]
fn test_parse_allowed_origins() {
    let origins = parse_allowed_origins("http://localhost:5173, https://tally.example.com,,");
    assert_eq!(
        origins,
        vec!["http://localhost:5173", "https://tally.example.com"]
    );
}
