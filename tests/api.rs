//! End-to-end tests against the real router — the same `server::router` the
//! binary serves, driven in-process with `tower::ServiceExt::oneshot`.

use axum::{
    body::{to_bytes, Body},
    http::{header, Request, StatusCode},
    Router,
};
use serde_json::{json, Value};
use tower::ServiceExt;

use unitrade::{config::Config, server, state::build_state};

fn test_config(seed_demo_accounts: bool) -> Config {
    Config {
        bind_addr: "127.0.0.1:0".to_string(),
        jwt_secret: "test-secret".to_string(),
        jwt_ttl_hours: 1,
        seed_demo_accounts,
    }
}

async fn test_app() -> Router {
    server::router(build_state(test_config(false)).await.unwrap())
}

fn post_json(path: &str, body: Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(path)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get(path: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method("GET").uri(path);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

/// Register a throwaway account and return its bearer token.
async fn register(app: &Router, email: &str) -> String {
    let (status, body) = send(
        app,
        post_json(
            "/api/auth/register",
            json!({ "username": "trader", "email": email, "password": "s3cret" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    body["token"].as_str().unwrap().to_string()
}

// ─── Public surface ───────────────────────────────────────────────────────────

#[tokio::test]
async fn health_is_public() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/api/health", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "ok");
}

#[tokio::test]
async fn market_overview_is_public_and_well_formed() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/api/market/overview", None)).await;

    assert_eq!(status, StatusCode::OK);
    let assets = body["assets"].as_array().unwrap();
    assert!(!assets.is_empty());
    for asset in assets {
        assert!(asset["price"].as_f64().unwrap() > 0.0);
        assert!(asset["symbol"].is_string());
    }
}

#[tokio::test]
async fn market_rates_served() {
    let app = test_app().await;
    let (status, body) = send(&app, get("/api/market/rates", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["base"], "USD");
    assert_eq!(body["rates"]["USD"], 1.0);
}

// ─── Auth ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn register_rejects_missing_fields() {
    let app = test_app().await;
    let (status, body) = send(
        &app,
        post_json("/api/auth/register", json!({ "username": "x" })),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["message"], "Missing fields");
}

#[tokio::test]
async fn register_conflicts_on_duplicate_email() {
    let app = test_app().await;
    register(&app, "dup@example.com").await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/auth/register",
            json!({ "username": "other", "email": "dup@example.com", "password": "pw" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["message"], "Email already registered");
}

#[tokio::test]
async fn login_roundtrip_and_wrong_password() {
    let app = test_app().await;
    register(&app, "login@example.com").await;

    let (status, body) = send(
        &app,
        post_json(
            "/api/auth/login",
            json!({ "email": "login@example.com", "password": "s3cret" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["email"], "login@example.com");

    let (status, body) = send(
        &app,
        post_json(
            "/api/auth/login",
            json!({ "email": "login@example.com", "password": "wrong" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid credentials");
}

#[tokio::test]
async fn seeded_demo_account_can_login() {
    let app = server::router(build_state(test_config(true)).await.unwrap());

    let (status, body) = send(
        &app,
        post_json(
            "/api/auth/login",
            json!({ "email": "demo@unitrade.com", "password": "password" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["user"]["username"], "demo_trader");
}

#[tokio::test]
async fn protected_routes_demand_tokens() {
    let app = test_app().await;

    let (status, body) = send(&app, get("/api/user/wallet", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing token");

    let (status, body) = send(&app, get("/api/user/wallet", Some("garbage"))).await;
    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["message"], "Invalid token");

    let (status, _) = send(&app, get("/api/transactions/history", None)).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

// ─── Trading flow ─────────────────────────────────────────────────────────────

#[tokio::test]
async fn register_login_trade_history_roundtrip() {
    let app = test_app().await;
    register(&app, "flow@example.com").await;

    // Trade with the login token rather than the registration one.
    let (status, body) = send(
        &app,
        post_json(
            "/api/auth/login",
            json!({ "email": "flow@example.com", "password": "s3cret" }),
        ),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    let token = body["token"].as_str().unwrap().to_string();

    // Without a token the ledger must refuse.
    let (status, body) = send(
        &app,
        post_json("/api/transactions/execute", json!({
            "type": "BUY",
            "assetSymbol": "AAPL",
            "quantity": 1.0,
            "priceAtTransaction": 150.0
        })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Missing token");

    let mut request = post_json("/api/transactions/execute", json!({
        "type": "BUY",
        "assetSymbol": "AAPL",
        "quantity": 1.0,
        "priceAtTransaction": 150.0
    }));
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );
    let (status, body) = send(&app, request).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["transaction"]["fiatEquivalent"], 150.0);
    assert_eq!(body["transaction"]["type"], "BUY");

    let (status, body) = send(&app, get("/api/transactions/history", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    let history = body.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["assetSymbol"], "AAPL");
    assert_eq!(history[0]["fiatEquivalent"], 150.0);
}

#[tokio::test]
async fn execute_validates_payload() {
    let app = test_app().await;
    let token = register(&app, "validate@example.com").await;

    let cases = [
        (json!({ "type": "BUY", "assetSymbol": "AAPL", "quantity": 1.0 }), "Missing required fields"),
        (json!({ "type": "HOLD", "assetSymbol": "AAPL", "quantity": 1.0, "priceAtTransaction": 1.0 }), "Invalid trade type"),
        (json!({ "type": "BUY", "assetSymbol": " ", "quantity": 1.0, "priceAtTransaction": 1.0 }), "Asset symbol is required"),
        (json!({ "type": "BUY", "assetSymbol": "AAPL", "quantity": 0.0, "priceAtTransaction": 1.0 }), "Quantity must be positive"),
        (json!({ "type": "BUY", "assetSymbol": "AAPL", "quantity": 1.0, "priceAtTransaction": -3.0 }), "Price must be positive"),
    ];

    for (payload, message) in cases {
        let mut request = post_json("/api/transactions/execute", payload);
        request.headers_mut().insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        let (status, body) = send(&app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body["message"], message);
    }
}

#[tokio::test]
async fn wallet_reflects_ledger() {
    let app = test_app().await;
    let token = register(&app, "wallet@example.com").await;

    for (trade_type, quantity, price) in [("BUY", 2.0, 100.0), ("SELL", 1.0, 120.0)] {
        let mut request = post_json("/api/transactions/execute", json!({
            "type": trade_type,
            "assetSymbol": "BTC",
            "quantity": quantity,
            "priceAtTransaction": price
        }));
        request.headers_mut().insert(
            header::AUTHORIZATION,
            format!("Bearer {token}").parse().unwrap(),
        );
        let (status, _) = send(&app, request).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = send(&app, get("/api/user/wallet", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);

    let holdings = body["holdings"].as_array().unwrap();
    assert_eq!(holdings.len(), 1);
    assert_eq!(holdings[0]["symbol"], "BTC");
    assert_eq!(holdings[0]["quantity"], 1.0);
    assert!(body["totalNetWorth"].as_f64().unwrap() > 0.0);
    assert!(body["timestamp"].is_string());
}

#[tokio::test]
async fn fresh_account_has_empty_wallet() {
    let app = test_app().await;
    let token = register(&app, "empty@example.com").await;

    let (status, body) = send(&app, get("/api/user/wallet", Some(&token))).await;
    assert_eq!(status, StatusCode::OK);
    assert!(body["holdings"].as_array().unwrap().is_empty());
    assert_eq!(body["totalNetWorth"], 0.0);
}
