//! User profile page.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;
use bidua_core::brpp::Membership;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::Result;
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::CurrentUser;
use crate::routes::layout::Layout;
use crate::routes::partner::load_membership;

/// Profile page template.
#[derive(Template, WebTemplate)]
#[template(path = "account/profile.html")]
pub struct ProfileTemplate {
    pub layout: Layout,
    pub user: CurrentUser,
    pub membership: Membership,
}

/// Personal info, membership state and quick links.
#[instrument(skip(session, user), fields(user_id = %user.id))]
pub async fn index(RequireAuth(user): RequireAuth, session: Session) -> Result<impl IntoResponse> {
    Ok(ProfileTemplate {
        layout: Layout::load(&session).await,
        membership: load_membership(&session).await?,
        user,
    })
}
