//! Flat-rate shipping tiers keyed by total item count.

use rust_decimal::Decimal;
use serde::Serialize;

/// Per-item rate charged once an order passes the last flat tier.
pub const BULK_RATE_PER_ITEM: i64 = 50;

/// One flat-fee band: orders with `min..=max` items pay `fee`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ShippingTier {
    pub min: u64,
    pub max: u64,
    pub fee: i64,
}

/// Flat tiers in ascending order. Counts above the last tier pay
/// [`BULK_RATE_PER_ITEM`] per item.
///
/// The 51–100 band is 10000, not 1000. It looks like a data-entry slip but it
/// is what customers are currently charged, so it stays until the business
/// confirms the intended number.
pub const TIERS: [ShippingTier; 7] = [
    ShippingTier { min: 0, max: 0, fee: 0 },
    ShippingTier { min: 1, max: 3, fee: 100 },
    ShippingTier { min: 4, max: 10, fee: 200 },
    ShippingTier { min: 11, max: 20, fee: 300 },
    ShippingTier { min: 21, max: 40, fee: 400 },
    ShippingTier { min: 41, max: 50, fee: 500 },
    ShippingTier { min: 51, max: 100, fee: 10_000 },
];

/// The flat tier covering `total_items`, or `None` once the per-item rate
/// applies.
#[must_use]
pub fn tier_for(total_items: u64) -> Option<&'static ShippingTier> {
    TIERS
        .iter()
        .find(|tier| (tier.min..=tier.max).contains(&total_items))
}

/// Shipping fee in rupees for an order of `total_items` units.
#[must_use]
pub fn shipping_fee(total_items: u64) -> Decimal {
    tier_for(total_items).map_or_else(
        || Decimal::from(total_items) * Decimal::from(BULK_RATE_PER_ITEM),
        |tier| Decimal::from(tier.fee),
    )
}
