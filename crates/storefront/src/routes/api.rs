//! JSON endpoints for the shipping quote and the cost calculator.

use axum::{
    Json,
    extract::Query,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use bidua_core::calculator::{CalculatorError, CalculatorInputs, CostBreakdown};
use bidua_core::shipping::{ShippingTier, shipping_fee, tier_for};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Error body for API endpoints.
#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: String,
}

impl ApiError {
    fn new(msg: impl Into<String>) -> Self {
        Self { error: msg.into() }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (StatusCode::BAD_REQUEST, Json(self)).into_response()
    }
}

impl From<CalculatorError> for ApiError {
    fn from(err: CalculatorError) -> Self {
        Self::new(err.to_string())
    }
}

// =============================================================================
// Shipping
// =============================================================================

#[derive(Debug, Deserialize)]
pub struct ShippingQuery {
    #[serde(default)]
    pub items: u64,
}

/// Shipping quote for an item count.
#[derive(Debug, Serialize)]
pub struct ShippingQuote {
    pub items: u64,
    pub fee: Decimal,
    /// `None` when the per-item bulk rate applies.
    pub tier: Option<ShippingTier>,
}

/// GET /api/shipping?items=N
#[instrument]
pub async fn shipping(Query(query): Query<ShippingQuery>) -> Json<ShippingQuote> {
    Json(ShippingQuote {
        items: query.items,
        fee: shipping_fee(query.items),
        tier: tier_for(query.items).copied(),
    })
}

// =============================================================================
// Calculator
// =============================================================================

/// POST /api/calculator
///
/// # Errors
///
/// Returns `ApiError` (400) when the recipe has no base ingredient.
#[instrument(skip(inputs), fields(ingredients = inputs.ingredients.len()))]
pub async fn calculate(
    Json(inputs): Json<CalculatorInputs>,
) -> Result<Json<CostBreakdown>, ApiError> {
    Ok(Json(inputs.compute()?))
}
