//! Demo login and the login-gated partner pages.

use axum::http::StatusCode;
use bidua_integration_tests::{TestApp, form};

const GATED_PAGES: [&str; 5] = [
    "/account",
    "/partner-wallet",
    "/queue-tracker",
    "/b2b-catalog",
    "/join-brpp",
];

// =============================================================================
// Login
// =============================================================================

#[tokio::test]
async fn test_gated_pages_redirect_anonymous_visitors() {
    let mut app = TestApp::new();
    for page in GATED_PAGES {
        let response = app.get(page).await;
        assert!(response.redirects_to("/auth/login"), "{page}");
    }

    let add = app
        .post_form("/b2b-catalog/add", "product_id=bidua-radiance-15")
        .await;
    assert!(add.redirects_to("/auth/login"));
}

#[tokio::test]
async fn test_wrong_credentials_are_rejected() {
    let mut app = TestApp::new();
    let response = app
        .post_form("/auth/login", &form(&[("username", "1234"), ("password", "0000")]))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert!(response.body.contains("Invalid credentials. Please try again."));
    assert!(app.get("/account").await.redirects_to("/auth/login"));
}

#[tokio::test]
async fn test_login_opens_gated_pages_and_logout_closes_them() {
    let mut app = TestApp::new();

    assert!(app.login().await.redirects_to("/account"));

    for page in GATED_PAGES {
        assert_eq!(app.get(page).await.status, StatusCode::OK, "{page}");
    }

    let profile = app.get("/account").await;
    assert!(profile.body.contains("user@example.com"));
    assert!(profile.body.contains("BRPP Member"));

    assert!(app.post_form("/auth/logout", "").await.redirects_to("/"));
    assert!(app.get("/account").await.redirects_to("/auth/login"));
}

#[tokio::test]
async fn test_login_keeps_the_cart() {
    let mut app = TestApp::new();
    app.add_to_cart(2).await;
    app.login().await;

    assert!(app.get("/cart").await.body.contains("₹2,998"));
}

#[tokio::test]
async fn test_credential_posts_are_rate_limited() {
    let mut app = TestApp::new();
    let wrong = form(&[("username", "x"), ("password", "y")]);

    for _ in 0..5 {
        let response = app.post_form("/auth/login", &wrong).await;
        assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    }
    let limited = app.post_form("/auth/login", &wrong).await;
    assert_eq!(limited.status, StatusCode::TOO_MANY_REQUESTS);

    // Pages are not limited.
    assert_eq!(app.get("/auth/login").await.status, StatusCode::OK);
}

// =============================================================================
// Signup
// =============================================================================

#[tokio::test]
async fn test_signup_password_mismatch() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/auth/signup",
            &form(&[
                ("email", "new@example.com"),
                ("phone", "9876543210"),
                ("password", "abc"),
                ("confirm_password", "abd"),
            ]),
        )
        .await;
    assert_eq!(response.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(response.body.contains("Passwords do not match"));
    assert!(response.body.contains(r#"value="new@example.com""#));
}

#[tokio::test]
async fn test_signup_with_demo_credentials_signs_in() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/auth/signup",
            &form(&[
                ("email", "1234"),
                ("password", "1234"),
                ("confirm_password", "1234"),
            ]),
        )
        .await;
    assert!(response.redirects_to("/"));
    assert_eq!(app.get("/account").await.status, StatusCode::OK);
}

#[tokio::test]
async fn test_signup_with_other_details_does_not_sign_in() {
    let mut app = TestApp::new();
    let response = app
        .post_form(
            "/auth/signup",
            &form(&[
                ("email", "new@example.com"),
                ("password", "secret"),
                ("confirm_password", "secret"),
            ]),
        )
        .await;
    assert!(response.redirects_to("/"));
    assert!(app.get("/account").await.redirects_to("/auth/login"));
}

// =============================================================================
// Partner pages
// =============================================================================

#[tokio::test]
async fn test_wallet_page() {
    let mut app = TestApp::new();
    app.login().await;

    let wallet = app.get("/partner-wallet").await;
    assert!(wallet.body.contains("₹1,24,000"));
    assert!(wallet.body.contains("₹15,000"));
    assert!(wallet.body.contains("₹1,50,000"));
    assert!(wallet.body.contains("SN-101"));
    assert!(wallet.body.contains("Escrow Pending"));
}

#[tokio::test]
async fn test_queue_tracker_shows_only_own_orders() {
    let mut app = TestApp::new();
    app.login().await;

    let queue = app.get("/queue-tracker").await;
    for mine in ["Q-001", "Q-003", "Q-005"] {
        assert!(queue.body.contains(mine), "{mine}");
    }
    for theirs in ["Q-002", "Q-004"] {
        assert!(!queue.body.contains(theirs), "{theirs}");
    }
    assert!(queue.body.contains("User A"));
    assert!(queue.body.contains("<li>SN-020</li>"));
    assert!(queue.body.contains("60% of profit + full cost reimbursement"));
}

#[tokio::test]
async fn test_b2b_catalog_add_to_cart() {
    let mut app = TestApp::new();
    app.login().await;

    let catalog = app.get("/b2b-catalog").await;
    assert!(catalog.body.contains("₹1,150"));
    assert!(catalog.body.contains("81% OFF"));

    let add = app
        .post_form("/b2b-catalog/add", "product_id=bidua-radiance-15-bundle")
        .await;
    assert!(add.redirects_to("/cart"));

    let cart = app.get("/cart").await;
    assert!(cart.body.contains("BIDUA Radiance 15 (Pack of 3)"));
    assert!(cart.body.contains("<dt>B2B Subtotal</dt><dd>₹2,800</dd>"));

    let missing = app
        .post_form("/b2b-catalog/add", "product_id=not-a-product")
        .await;
    assert_eq!(missing.status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_join_brpp_flow() {
    let mut app = TestApp::new();
    app.login().await;

    let page = app.get("/join-brpp").await;
    assert!(page.body.contains("₹4,999"));
    assert!(page.body.contains("Subscribe Now"));

    // The profile cannot be saved before subscribing.
    let early = app
        .post_form("/join-brpp/profile", "business_name=Early")
        .await;
    assert!(early.redirects_to("/join-brpp"));

    assert!(
        app.post_form("/join-brpp/subscribe", "")
            .await
            .redirects_to("/join-brpp")
    );
    assert!(app.get("/join-brpp").await.body.contains("Business Profile"));

    let invalid = app
        .post_form(
            "/join-brpp/profile",
            &form(&[
                ("business_name", "Glow Pharmacy"),
                ("owner_name", "Anita Desai"),
                ("phone", "+91 99887 76655"),
                ("email", "not-an-email"),
                ("address", "12 Park Street, Kolkata"),
            ]),
        )
        .await;
    assert_eq!(invalid.status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(invalid.body.contains("please enter a valid email address"));
    assert!(invalid.body.contains(r#"value="Glow Pharmacy""#));

    let saved = app
        .post_form(
            "/join-brpp/profile",
            &form(&[
                ("business_name", "Glow Pharmacy"),
                ("owner_name", "Anita Desai"),
                ("phone", "+91 99887 76655"),
                ("email", "anita@glowpharmacy.in"),
                ("address", "12 Park Street, Kolkata"),
                ("gst_number", "27aapfu0939f1zv"),
            ]),
        )
        .await;
    assert!(saved.redirects_to("/join-brpp"));
    assert!(app.get("/join-brpp").await.body.contains("Welcome to BRPP, Anita Desai!"));

    let profile = app.get("/account").await;
    assert!(profile.body.contains("Glow Pharmacy"));
    assert!(profile.body.contains("27AAPFU0939F1ZV"));
}
