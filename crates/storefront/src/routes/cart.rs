//! Cart route handlers.
//!
//! The cart lives in the visitor's session. Every mutation is a plain form
//! POST that redirects back to the cart page.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    response::{IntoResponse, Redirect},
};
use bidua_core::cart::Cart;
use bidua_core::catalog::featured_product;
use bidua_core::ProductId;
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::session_keys;
use crate::routes::layout::Layout;

// =============================================================================
// Session Helpers
// =============================================================================

/// Read the visitor's cart, empty if they have none yet.
///
/// # Errors
///
/// Returns an error if the session store cannot be read.
pub async fn load_cart(session: &Session) -> Result<Cart> {
    Ok(session
        .get::<Cart>(session_keys::CART)
        .await?
        .unwrap_or_default())
}

/// Write the visitor's cart back to the session.
///
/// # Errors
///
/// Returns an error if the session store cannot be written.
pub async fn save_cart(session: &Session, cart: &Cart) -> Result<()> {
    session.insert(session_keys::CART, cart).await?;
    Ok(())
}

// =============================================================================
// Form Types
// =============================================================================

/// Add to cart form data.
#[derive(Debug, Deserialize)]
pub struct AddToCartForm {
    /// Defaults to the featured product.
    pub product_id: Option<String>,
}

/// Update cart form data.
#[derive(Debug, Deserialize)]
pub struct UpdateCartForm {
    pub id: String,
    pub quantity: i64,
}

/// Remove from cart form data.
#[derive(Debug, Deserialize)]
pub struct RemoveFromCartForm {
    pub id: String,
}

// =============================================================================
// Templates
// =============================================================================

/// Cart page template.
#[derive(Template, WebTemplate)]
#[template(path = "cart/show.html")]
pub struct CartShowTemplate {
    pub layout: Layout,
    pub cart: Cart,
}

/// Cart count badge fragment template.
#[derive(Template, WebTemplate)]
#[template(path = "partials/cart_count.html")]
pub struct CartCountTemplate {
    pub count: u64,
}

// =============================================================================
// Handlers
// =============================================================================

/// Display cart page.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<impl IntoResponse> {
    Ok(CartShowTemplate {
        layout: Layout::load(&session).await,
        cart: load_cart(&session).await?,
    })
}

/// Add one unit of the storefront product.
#[instrument(skip(session))]
pub async fn add(session: Session, Form(form): Form<AddToCartForm>) -> Result<Redirect> {
    let product = featured_product();
    if let Some(id) = form
        .product_id
        .filter(|id| !id.is_empty() && id.as_str() != product.id.as_str())
    {
        return Err(AppError::NotFound(format!("product {id}")));
    }

    let mut cart = load_cart(&session).await?;
    cart.add(product.to_cart_item());
    save_cart(&session, &cart).await?;

    add_breadcrumb("cart", "Added to cart", &[("product_id", product.id.as_str())]);
    tracing::info!(items = cart.total_items(), "Added to cart");

    Ok(Redirect::to("/cart"))
}

/// Set a line's quantity; zero or less removes it.
#[instrument(skip(session))]
pub async fn update(session: Session, Form(form): Form<UpdateCartForm>) -> Result<Redirect> {
    let mut cart = load_cart(&session).await?;
    cart.update_quantity(&ProductId::new(form.id), form.quantity)?;
    save_cart(&session, &cart).await?;
    Ok(Redirect::to("/cart"))
}

/// Remove a line from the cart.
#[instrument(skip(session))]
pub async fn remove(session: Session, Form(form): Form<RemoveFromCartForm>) -> Result<Redirect> {
    let mut cart = load_cart(&session).await?;
    if cart.remove(&ProductId::new(form.id.as_str())) {
        save_cart(&session, &cart).await?;
    } else {
        tracing::debug!(id = %form.id, "Remove for a line that is not in the cart");
    }
    Ok(Redirect::to("/cart"))
}

/// Cart count badge fragment.
#[instrument(skip(session))]
pub async fn count(session: Session) -> Result<impl IntoResponse> {
    Ok(CartCountTemplate {
        count: load_cart(&session).await?.total_items(),
    })
}
