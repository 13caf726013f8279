//! JSON endpoints, static assets and the landing page.

#![allow(clippy::unwrap_used)]

use axum::http::StatusCode;
use bidua_integration_tests::TestApp;
use serde_json::json;

#[tokio::test]
async fn test_shipping_quote_in_flat_tier() {
    let mut app = TestApp::new();
    let response = app.get("/api/shipping?items=7").await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    assert_eq!(body["items"], 7);
    assert_eq!(body["fee"], "200");
    assert_eq!(body["tier"]["min"], 4);
    assert_eq!(body["tier"]["max"], 10);
}

#[tokio::test]
async fn test_shipping_quote_bulk_rate() {
    let mut app = TestApp::new();
    let body = app.get("/api/shipping?items=101").await.json();
    assert_eq!(body["fee"], "5050");
    assert!(body["tier"].is_null());

    let empty = app.get("/api/shipping").await.json();
    assert_eq!(empty["fee"], "0");
}

#[tokio::test]
async fn test_shipping_quote_rejects_bad_count() {
    let mut app = TestApp::new();
    let response = app.get("/api/shipping?items=abc").await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_calculator_api_defaults() {
    let mut app = TestApp::new();
    let response = app.post_json("/api/calculator", &json!({})).await;
    assert_eq!(response.status, StatusCode::OK);

    let body = response.json();
    let per_jar = body["total_cost_per_jar"].as_f64().unwrap();
    assert!((per_jar - 594.28).abs() < 0.01, "{per_jar}");
    assert_eq!(body["ingredients"].as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn test_calculator_api_requires_base() {
    let mut app = TestApp::new();
    let response = app
        .post_json(
            "/api/calculator",
            &json!({
                "ingredients": [
                    { "name": "Aloe Gel", "quantity": 50, "unit": "g", "bulk_price": 400 }
                ]
            }),
        )
        .await;
    assert_eq!(response.status, StatusCode::BAD_REQUEST);
    assert_eq!(response.json()["error"], "no base ingredient defined");
}

#[tokio::test]
async fn test_health_and_static_assets() {
    let mut app = TestApp::new();
    let health = app.get("/health").await;
    assert_eq!(health.status, StatusCode::OK);
    assert_eq!(health.body, "ok");

    let css = app.get("/static/css/main.css").await;
    assert_eq!(css.status, StatusCode::OK);
    assert!(css.header("content-type").unwrap().starts_with("text/css"));

    let missing = app.get("/static/css/missing.css").await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_response_headers() {
    let mut app = TestApp::new();
    let response = app.get("/").await;
    assert!(response.header("x-request-id").is_some());
    assert_eq!(response.header("x-content-type-options"), Some("nosniff"));
    assert_eq!(response.header("x-frame-options"), Some("DENY"));
}

#[tokio::test]
async fn test_home_page() {
    let mut app = TestApp::new();
    let page = app.get("/").await;
    assert_eq!(page.status, StatusCode::OK);
    assert!(page.body.contains("RADIANCE 15"));
    assert!(page.body.contains("70% OFF"));
    assert!(page.body.contains("₹1,499"));
    assert!(page.body.contains("Priya Sharma"));
    assert!(page.body.contains(r#"action="/cart/add""#));
}

#[tokio::test]
async fn test_unknown_page_is_not_found() {
    let mut app = TestApp::new();
    assert_eq!(app.get("/no-such-page").await.status, StatusCode::NOT_FOUND);
}
