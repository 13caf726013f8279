//! Partner pages: wallet, queue tracker, B2B catalog and BRPP membership.
//!
//! All of these require a signed-in user and show fixed demonstration data.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
};
use bidua_core::ProductId;
use bidua_core::brpp::{BusinessProfileForm, Membership};
use bidua_core::catalog::{
    B2bProduct, BRPP_ANNUAL_FEE, PartnerWallet, QueuedOrder, StockUnit, b2b_products,
    find_b2b_product, global_stock, partner_wallet, queued_orders_for,
};
use bidua_core::types::StockStatus;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::middleware::RequireAuth;
use crate::models::session_keys;
use crate::routes::cart::{load_cart, save_cart};
use crate::routes::layout::Layout;

// =============================================================================
// Session Helpers
// =============================================================================

/// Read BRPP membership progress from the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_membership(session: &Session) -> Result<Membership> {
    Ok(session
        .get::<Membership>(session_keys::MEMBERSHIP)
        .await?
        .unwrap_or_default())
}

async fn save_membership(session: &Session, membership: &Membership) -> Result<()> {
    session.insert(session_keys::MEMBERSHIP, membership).await?;
    Ok(())
}

// =============================================================================
// Templates
// =============================================================================

#[derive(Template, WebTemplate)]
#[template(path = "partner/wallet.html")]
pub struct WalletTemplate {
    pub layout: Layout,
    pub wallet: PartnerWallet,
}

#[derive(Template, WebTemplate)]
#[template(path = "partner/queue.html")]
pub struct QueueTemplate {
    pub layout: Layout,
    pub sold: Vec<StockUnit>,
    pub available: Vec<StockUnit>,
    pub orders: Vec<QueuedOrder>,
}

#[derive(Template, WebTemplate)]
#[template(path = "partner/b2b_catalog.html")]
pub struct B2bCatalogTemplate {
    pub layout: Layout,
    pub products: Vec<B2bProduct>,
}

#[derive(Template, WebTemplate)]
#[template(path = "partner/join_brpp.html")]
pub struct JoinBrppTemplate {
    pub layout: Layout,
    pub annual_fee: i64,
    pub membership: Membership,
    pub form: BusinessProfileForm,
    pub error: Option<String>,
}

/// Add-to-order form on the B2B catalog.
#[derive(Debug, Deserialize)]
pub struct AddB2bForm {
    pub product_id: String,
}

// =============================================================================
// Handlers
// =============================================================================

/// Partner wallet balances and realizations.
#[instrument(skip(session, user), fields(user_id = %user.id))]
pub async fn wallet(RequireAuth(user): RequireAuth, session: Session) -> impl IntoResponse {
    WalletTemplate {
        layout: Layout::load(&session).await,
        wallet: partner_wallet(),
    }
}

/// Stock allocation and the user's place in the queue.
#[instrument(skip(session, user), fields(user_id = %user.id))]
pub async fn queue_tracker(RequireAuth(user): RequireAuth, session: Session) -> impl IntoResponse {
    let (sold, available): (Vec<StockUnit>, Vec<StockUnit>) = global_stock()
        .into_iter()
        .partition(|unit| unit.status == StockStatus::Sold);

    QueueTemplate {
        layout: Layout::load(&session).await,
        sold,
        available,
        orders: queued_orders_for(&user.id),
    }
}

/// Wholesale catalog.
#[instrument(skip(session, user), fields(user_id = %user.id))]
pub async fn b2b_catalog(RequireAuth(user): RequireAuth, session: Session) -> impl IntoResponse {
    B2bCatalogTemplate {
        layout: Layout::load(&session).await,
        products: b2b_products(),
    }
}

/// Put a wholesale product in the cart at its B2B price.
#[instrument(skip(session, user), fields(user_id = %user.id))]
pub async fn add_b2b_to_cart(
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<AddB2bForm>,
) -> Result<Redirect> {
    let product = find_b2b_product(&ProductId::new(form.product_id.as_str()))
        .ok_or_else(|| AppError::NotFound(format!("B2B product {}", form.product_id)))?;

    let mut cart = load_cart(&session).await?;
    cart.add(product.to_cart_item());
    save_cart(&session, &cart).await?;

    add_breadcrumb(
        "cart",
        "Added B2B product to cart",
        &[("product_id", product.id.as_str())],
    );

    Ok(Redirect::to("/cart"))
}

/// BRPP membership page.
#[instrument(skip(session, user), fields(user_id = %user.id))]
pub async fn join_brpp(RequireAuth(user): RequireAuth, session: Session) -> Result<Response> {
    Ok(JoinBrppTemplate {
        layout: Layout::load(&session).await,
        annual_fee: BRPP_ANNUAL_FEE,
        membership: load_membership(&session).await?,
        form: BusinessProfileForm::default(),
        error: None,
    }
    .into_response())
}

/// Simulated annual fee payment; reveals the business profile form.
#[instrument(skip(session, user), fields(user_id = %user.id))]
pub async fn subscribe(RequireAuth(user): RequireAuth, session: Session) -> Result<Redirect> {
    let mut membership = load_membership(&session).await?;
    membership.subscribe();
    save_membership(&session, &membership).await?;
    tracing::info!("BRPP subscription payment initiated");
    Ok(Redirect::to("/join-brpp"))
}

/// Save the business profile.
#[instrument(skip(session, user, form), fields(user_id = %user.id))]
pub async fn save_profile(
    RequireAuth(user): RequireAuth,
    session: Session,
    Form(form): Form<BusinessProfileForm>,
) -> Result<Response> {
    let mut membership = load_membership(&session).await?;
    if !membership.subscribed {
        return Ok(Redirect::to("/join-brpp").into_response());
    }

    match form.validate() {
        Ok(profile) => {
            tracing::info!(business = %profile.business_name, "Business profile saved");
            membership.profile = Some(profile);
            save_membership(&session, &membership).await?;
            Ok(Redirect::to("/join-brpp").into_response())
        }
        Err(e) => Ok((
            StatusCode::UNPROCESSABLE_ENTITY,
            JoinBrppTemplate {
                layout: Layout::load(&session).await,
                annual_fee: BRPP_ANNUAL_FEE,
                membership,
                form,
                error: Some(e.to_string()),
            },
        )
            .into_response()),
    }
}
