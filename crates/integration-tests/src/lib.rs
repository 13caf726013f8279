//! Integration test harness for the BIDUA storefront.
//!
//! Tests drive the real router in-process with `tower::ServiceExt::oneshot`.
//! [`TestApp`] carries the session cookie between requests the way a browser
//! would, and tags every request with its own client address so rate limits
//! never leak between tests.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p bidua-integration-tests
//! ```

use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

use axum::{
    Router,
    body::Body,
    http::{HeaderMap, Method, Request, StatusCode, header},
};
use bidua_storefront::{app, config::StorefrontConfig, state::AppState};
use tower::ServiceExt;

/// Session cookie set by the storefront.
const SESSION_COOKIE: &str = "bidua_session";

static NEXT_CLIENT: AtomicU32 = AtomicU32::new(1);

/// Configuration used by every test: no checkout delay, assets from the
/// storefront crate.
#[must_use]
pub fn test_config() -> StorefrontConfig {
    StorefrontConfig {
        checkout_delay: Duration::ZERO,
        static_dir: concat!(env!("CARGO_MANIFEST_DIR"), "/../storefront/static").into(),
        ..StorefrontConfig::default()
    }
}

/// URL-encode form fields.
#[must_use]
pub fn form(fields: &[(&str, &str)]) -> String {
    url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(fields)
        .finish()
}

/// A fully-read response.
#[derive(Debug)]
pub struct TestResponse {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: String,
}

impl TestResponse {
    /// The `Location` header of a redirect.
    #[must_use]
    pub fn location(&self) -> Option<&str> {
        self.headers
            .get(header::LOCATION)
            .and_then(|v| v.to_str().ok())
    }

    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers.get(name).and_then(|v| v.to_str().ok())
    }

    /// Parse the body as JSON, or `Null` if it is not JSON.
    #[must_use]
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.body).unwrap_or_default()
    }

    /// Whether this is a 303 redirect to `path`.
    #[must_use]
    pub fn redirects_to(&self, path: &str) -> bool {
        self.status == StatusCode::SEE_OTHER && self.location() == Some(path)
    }
}

/// One visitor talking to a fresh storefront.
pub struct TestApp {
    router: Router,
    cookie: Option<String>,
    client_ip: String,
}

impl Default for TestApp {
    fn default() -> Self {
        Self::new()
    }
}

impl TestApp {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(test_config())
    }

    #[must_use]
    pub fn with_config(config: StorefrontConfig) -> Self {
        let n = NEXT_CLIENT.fetch_add(1, Ordering::Relaxed);
        Self {
            router: app(AppState::new(config)),
            cookie: None,
            client_ip: format!("10.{}.{}.{}", (n >> 16) & 0xff, (n >> 8) & 0xff, n & 0xff),
        }
    }

    /// Forget the session cookie, as if the browser was closed.
    pub fn clear_cookies(&mut self) {
        self.cookie = None;
    }

    pub async fn get(&mut self, path: &str) -> TestResponse {
        self.send(Method::GET, path, None, Body::empty()).await
    }

    pub async fn post_form(&mut self, path: &str, body: &str) -> TestResponse {
        self.send(
            Method::POST,
            path,
            Some("application/x-www-form-urlencoded"),
            Body::from(body.to_string()),
        )
        .await
    }

    pub async fn post_json(&mut self, path: &str, body: &serde_json::Value) -> TestResponse {
        self.send(
            Method::POST,
            path,
            Some("application/json"),
            Body::from(body.to_string()),
        )
        .await
    }

    /// Sign in with the default demo credentials.
    pub async fn login(&mut self) -> TestResponse {
        self.post_form(
            "/auth/login",
            &form(&[("username", "1234"), ("password", "1234")]),
        )
        .await
    }

    /// Put the storefront product in the cart `times` times.
    pub async fn add_to_cart(&mut self, times: usize) {
        for _ in 0..times {
            self.post_form("/cart/add", "product_id=luxeglow-face-cream")
                .await;
        }
    }

    async fn send(
        &mut self,
        method: Method,
        path: &str,
        content_type: Option<&str>,
        body: Body,
    ) -> TestResponse {
        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("x-forwarded-for", &self.client_ip);
        if let Some(content_type) = content_type {
            builder = builder.header(header::CONTENT_TYPE, content_type);
        }
        if let Some(cookie) = &self.cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        let request = match builder.body(body) {
            Ok(request) => request,
            Err(e) => panic!("invalid test request for {path}: {e}"),
        };

        let Ok(response) = self.router.clone().oneshot(request).await;

        let headers = response.headers().clone();
        self.remember_cookie(&headers);

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap_or_default();

        TestResponse {
            status,
            headers,
            body: String::from_utf8_lossy(&bytes).into_owned(),
        }
    }

    fn remember_cookie(&mut self, headers: &HeaderMap) {
        for value in headers.get_all(header::SET_COOKIE) {
            let Some(pair) = value
                .to_str()
                .ok()
                .and_then(|cookie| cookie.split(';').next())
            else {
                continue;
            };
            if pair.starts_with(&format!("{SESSION_COOKIE}=")) {
                self.cookie = Some(pair.trim().to_string());
            }
        }
    }
}
