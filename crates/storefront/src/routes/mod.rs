//! HTTP route handlers for the storefront.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                            - Landing page
//! GET  /health                      - Health check
//!
//! # Cart
//! GET  /cart                        - Cart page
//! POST /cart/add                    - Add the storefront product
//! POST /cart/update                 - Set a line quantity (0 removes)
//! POST /cart/remove                 - Remove a line
//! GET  /cart/count                  - Cart count badge (fragment)
//!
//! # Checkout
//! GET  /checkout                    - Checkout form
//! POST /checkout                    - Place order (simulated payment)
//! GET  /confirmation                - Order confirmation
//! GET  /confirmation/receipt.txt    - Printable receipt
//!
//! # Cost calculator
//! GET  /cost-calculator             - Calculator, or the unlock form
//! POST /cost-calculator             - Recompute with submitted inputs
//! POST /cost-calculator/unlock      - Unlock action (rate limited)
//!
//! # Auth
//! GET  /auth/login                  - Login page
//! POST /auth/login                  - Login action (rate limited)
//! GET  /auth/signup                 - Signup page
//! POST /auth/signup                 - Signup action (rate limited)
//! POST /auth/logout                 - Logout action
//!
//! # Partner pages (requires auth)
//! GET  /account                     - Profile
//! GET  /partner-wallet              - Wallet balances and realizations
//! GET  /queue-tracker               - Stock allocation queue
//! GET  /b2b-catalog                 - Wholesale catalog
//! POST /b2b-catalog/add             - Add a wholesale product to the cart
//! GET  /join-brpp                   - BRPP membership
//! POST /join-brpp/subscribe         - Pay the annual fee (simulated)
//! POST /join-brpp/profile           - Save the business profile
//!
//! # JSON API
//! GET  /api/shipping?items=N        - Shipping quote
//! POST /api/calculator              - Cost breakdown for a recipe
//! ```

pub mod account;
pub mod api;
pub mod auth;
pub mod calculator;
pub mod cart;
pub mod checkout;
pub mod home;
pub mod layout;
pub mod partner;

use axum::{
    Router,
    routing::{get, post},
};

use crate::middleware::{RateLimiterLayer, auth_rate_limiter};
use crate::state::AppState;

/// Create the auth routes router.
///
/// Credential POSTs share `limiter`; the pages themselves are not limited.
pub fn auth_routes(limiter: &RateLimiterLayer) -> Router<AppState> {
    Router::new()
        .route(
            "/login",
            post(auth::login)
                .layer(limiter.clone())
                .get(auth::login_page),
        )
        .route(
            "/signup",
            post(auth::signup)
                .layer(limiter.clone())
                .get(auth::signup_page),
        )
        .route("/logout", post(auth::logout))
}

/// Create the cart routes router.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(cart::show))
        .route("/add", post(cart::add))
        .route("/update", post(cart::update))
        .route("/remove", post(cart::remove))
        .route("/count", get(cart::count))
}

/// Create the checkout and confirmation routes.
pub fn checkout_routes() -> Router<AppState> {
    Router::new()
        .route("/checkout", get(checkout::show).post(checkout::place_order))
        .route("/confirmation", get(checkout::confirmation))
        .route("/confirmation/receipt.txt", get(checkout::receipt_text))
}

/// Create the cost calculator routes router.
pub fn calculator_routes(limiter: &RateLimiterLayer) -> Router<AppState> {
    Router::new()
        .route("/", get(calculator::show).post(calculator::calculate))
        .route("/unlock", post(calculator::unlock).layer(limiter.clone()))
}

/// Create the login-gated partner routes.
pub fn partner_routes() -> Router<AppState> {
    Router::new()
        .route("/account", get(account::index))
        .route("/partner-wallet", get(partner::wallet))
        .route("/queue-tracker", get(partner::queue_tracker))
        .route("/b2b-catalog", get(partner::b2b_catalog))
        .route("/b2b-catalog/add", post(partner::add_b2b_to_cart))
        .route("/join-brpp", get(partner::join_brpp))
        .route("/join-brpp/subscribe", post(partner::subscribe))
        .route("/join-brpp/profile", post(partner::save_profile))
}

/// Create the JSON API routes router.
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .route("/shipping", get(api::shipping))
        .route("/calculator", post(api::calculate))
}

/// Create all routes for the storefront.
pub fn routes() -> Router<AppState> {
    let limiter = auth_rate_limiter();

    Router::new()
        .route("/", get(home::home))
        .route("/health", get(health))
        .nest("/cart", cart_routes())
        .merge(checkout_routes())
        .nest("/cost-calculator", calculator_routes(&limiter))
        .nest("/auth", auth_routes(&limiter))
        .merge(partner_routes())
        .nest("/api", api_routes())
}

/// Liveness health check endpoint.
async fn health() -> &'static str {
    "ok"
}
