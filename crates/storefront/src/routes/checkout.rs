//! Checkout and order confirmation.
//!
//! Payment is simulated: placing an order waits for the configured delay,
//! snapshots the cart into a receipt kept in the session, and empties the
//! cart.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Redirect, Response},
};
use bidua_core::cart::Cart;
use bidua_core::order::{CustomerForm, OrderReceipt, seller};
use tower_sessions::Session;
use tracing::instrument;

use crate::error::{AppError, Result, add_breadcrumb};
use crate::filters;
use crate::models::session_keys;
use crate::routes::cart::{load_cart, save_cart};
use crate::routes::layout::Layout;
use crate::state::AppState;

// =============================================================================
// Templates
// =============================================================================

/// Checkout form with order summary.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/show.html")]
pub struct CheckoutTemplate {
    pub layout: Layout,
    pub cart: Cart,
    pub form: CustomerForm,
    pub error: Option<String>,
}

/// Shown instead of the form when there is nothing to pay for.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/empty.html")]
pub struct EmptyCheckoutTemplate {
    pub layout: Layout,
}

/// Order confirmation page.
#[derive(Template, WebTemplate)]
#[template(path = "checkout/confirmation.html")]
pub struct ConfirmationTemplate {
    pub layout: Layout,
    pub receipt: OrderReceipt,
    pub estimated_delivery: String,
}

/// Printable plain-text receipt.
#[derive(Template)]
#[template(path = "checkout/receipt.txt")]
pub struct ReceiptTemplate<'a> {
    pub receipt: &'a OrderReceipt,
    pub placed_date: String,
    pub placed_time: String,
    pub estimated_delivery: String,
    pub seller_name: &'static str,
    pub seller_gst: &'static str,
    pub seller_address_1: &'static str,
    pub seller_address_2: &'static str,
    pub seller_phone: &'static str,
    pub seller_orders_email: &'static str,
    pub seller_support_email: &'static str,
    pub seller_website: &'static str,
}

impl<'a> ReceiptTemplate<'a> {
    fn new(receipt: &'a OrderReceipt) -> Self {
        Self {
            receipt,
            placed_date: receipt.placed_at.format("%d/%m/%Y").to_string(),
            placed_time: receipt.placed_at.format("%H:%M:%S UTC").to_string(),
            estimated_delivery: long_date(receipt),
            seller_name: seller::NAME,
            seller_gst: seller::GST_NUMBER,
            seller_address_1: seller::ADDRESS_LINE_1,
            seller_address_2: seller::ADDRESS_LINE_2,
            seller_phone: seller::PHONE,
            seller_orders_email: seller::ORDERS_EMAIL,
            seller_support_email: seller::SUPPORT_EMAIL,
            seller_website: seller::WEBSITE,
        }
    }
}

/// "Wednesday, 19 March 2025"
fn long_date(receipt: &OrderReceipt) -> String {
    receipt
        .estimated_delivery
        .format("%A, %-d %B %Y")
        .to_string()
}

async fn last_receipt(session: &Session) -> Result<Option<OrderReceipt>> {
    Ok(session
        .get::<OrderReceipt>(session_keys::LAST_RECEIPT)
        .await?)
}

// =============================================================================
// Handlers
// =============================================================================

/// Display the checkout form, pre-filled with the demo customer.
#[instrument(skip(session))]
pub async fn show(session: Session) -> Result<Response> {
    let layout = Layout::load(&session).await;
    let cart = load_cart(&session).await?;

    if cart.is_empty() {
        return Ok(EmptyCheckoutTemplate { layout }.into_response());
    }

    Ok(CheckoutTemplate {
        layout,
        cart,
        form: CustomerForm::default(),
        error: None,
    }
    .into_response())
}

/// Place the order.
#[instrument(skip(state, session, form))]
pub async fn place_order(
    State(state): State<AppState>,
    session: Session,
    Form(form): Form<CustomerForm>,
) -> Result<Response> {
    let mut cart = load_cart(&session).await?;
    if cart.is_empty() {
        return Ok(Redirect::to("/checkout").into_response());
    }

    let customer = match form.validate() {
        Ok(customer) => customer,
        Err(e) => {
            tracing::debug!(error = %e, "Checkout form rejected");
            return Ok((
                StatusCode::UNPROCESSABLE_ENTITY,
                CheckoutTemplate {
                    layout: Layout::load(&session).await,
                    cart,
                    form,
                    error: Some(e.to_string()),
                },
            )
                .into_response());
        }
    };

    // Simulated payment processing
    tokio::time::sleep(state.config().checkout_delay).await;

    let receipt = OrderReceipt::place(&cart, customer, chrono::Utc::now())
        .map_err(|e| AppError::BadRequest(e.to_string()))?;

    session.insert(session_keys::LAST_RECEIPT, &receipt).await?;
    cart.clear();
    save_cart(&session, &cart).await?;

    add_breadcrumb(
        "checkout",
        "Order placed",
        &[("order_number", receipt.order_number.as_str())],
    );
    tracing::info!(
        order_number = %receipt.order_number,
        total = %receipt.total,
        payment_method = receipt.customer.payment_method.as_str(),
        "Order placed"
    );

    Ok(Redirect::to("/confirmation").into_response())
}

/// Order confirmation for the most recent order.
#[instrument(skip(session))]
pub async fn confirmation(session: Session) -> Result<Response> {
    let Some(receipt) = last_receipt(&session).await? else {
        return Ok(Redirect::to("/").into_response());
    };

    Ok(ConfirmationTemplate {
        layout: Layout::load(&session).await,
        estimated_delivery: long_date(&receipt),
        receipt,
    }
    .into_response())
}

/// Plain-text receipt for printing.
#[instrument(skip(session))]
pub async fn receipt_text(session: Session) -> Result<Response> {
    let receipt = last_receipt(&session)
        .await?
        .ok_or_else(|| AppError::NotFound("no order has been placed".to_string()))?;

    let body = ReceiptTemplate::new(&receipt).render()?;
    let disposition = format!("inline; filename=\"{}.txt\"", receipt.order_number);

    Ok((
        [
            (header::CONTENT_TYPE, "text/plain; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        body,
    )
        .into_response())
}
