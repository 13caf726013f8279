//! Authentication route handlers.
//!
//! Login accepts only the configured demo credential pair. Signup checks
//! the password confirmation, then tries the same demo login with the
//! submitted email and password and always lands on the home page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use bidua_core::auth::confirm_password;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{Result, clear_sentry_user, set_sentry_user};
use crate::filters;
use crate::middleware::{clear_current_user, set_current_user};
use crate::models::CurrentUser;
use crate::routes::layout::Layout;
use crate::state::AppState;

// =============================================================================
// Form Types
// =============================================================================

/// Login form data.
#[derive(Debug, Deserialize)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

/// Signup form data.
#[derive(Debug, Deserialize)]
pub struct SignupForm {
    pub email: String,
    #[serde(default)]
    pub phone: String,
    pub password: String,
    pub confirm_password: String,
}

/// Query parameters for error/success display.
#[derive(Debug, Deserialize)]
pub struct MessageQuery {
    pub error: Option<String>,
    pub success: Option<String>,
}

// =============================================================================
// Templates
// =============================================================================

/// Login page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/login.html")]
pub struct LoginTemplate {
    pub layout: Layout,
    pub error: Option<String>,
    pub success: Option<String>,
}

/// Signup page template.
#[derive(Template, WebTemplate)]
#[template(path = "auth/signup.html")]
pub struct SignupTemplate {
    pub layout: Layout,
    pub email: String,
    pub phone: String,
    pub error: Option<String>,
}

// =============================================================================
// Session Helpers
// =============================================================================

/// Sign the visitor in, rotating the session ID first.
async fn sign_in(session: &Session, user: CurrentUser) -> Result<()> {
    session.cycle_id().await?;
    set_current_user(session, &user).await?;
    set_sentry_user(&user.id, Some(&user.email));
    tracing::info!(user_id = %user.id, "User logged in");
    Ok(())
}

// =============================================================================
// Login Routes
// =============================================================================

/// Display the login page.
#[instrument(skip(session))]
pub async fn login_page(session: Session, Query(query): Query<MessageQuery>) -> impl IntoResponse {
    LoginTemplate {
        layout: Layout::load(&session).await,
        error: query.error,
        success: query.success,
    }
}

/// Handle login form submission.
#[instrument(skip(state, session, form), fields(username = %form.username))]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<LoginForm>,
) -> Result<Response> {
    match state.credentials().verify(&form.username, &form.password) {
        Ok(user) => {
            sign_in(&session, user.into()).await?;
            Ok(Redirect::to("/account").into_response())
        }
        Err(e) => {
            tracing::info!("Login rejected");
            Ok((
                StatusCode::UNAUTHORIZED,
                LoginTemplate {
                    layout: Layout::load(&session).await,
                    error: Some(e.to_string()),
                    success: None,
                },
            )
                .into_response())
        }
    }
}

/// Handle logout.
#[instrument(skip(session))]
pub async fn logout(session: Session) -> Result<Redirect> {
    clear_current_user(&session).await?;
    clear_sentry_user();
    tracing::info!("User logged out");
    Ok(Redirect::to("/"))
}

// =============================================================================
// Signup Routes
// =============================================================================

/// Display the signup page.
#[instrument(skip(session))]
pub async fn signup_page(session: Session) -> impl IntoResponse {
    SignupTemplate {
        layout: Layout::load(&session).await,
        email: String::new(),
        phone: String::new(),
        error: None,
    }
}

/// Handle signup form submission.
///
/// There is no account store; a matching confirmation simply attempts the
/// demo login with the email as username.
#[instrument(skip(state, session, form))]
pub async fn signup(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<SignupForm>,
) -> Result<Response> {
    if let Err(e) = confirm_password(&form.password, &form.confirm_password) {
        return Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            SignupTemplate {
                layout: Layout::load(&session).await,
                email: form.email,
                phone: form.phone,
                error: Some(e.to_string()),
            },
        )
            .into_response());
    }

    match state.credentials().verify(form.email.trim(), &form.password) {
        Ok(user) => sign_in(&session, user.into()).await?,
        Err(_) => tracing::info!("Signup completed without a matching demo login"),
    }

    Ok(Redirect::to("/").into_response())
}
