//! Shipping quotes from the tier table.

use bidua_core::format_inr;
use bidua_core::shipping::{BULK_RATE_PER_ITEM, TIERS, shipping_fee, tier_for};
use tracing::info;

/// Log the fee for `items` and which band it falls in.
pub fn quote(items: u64) {
    let fee = format_inr(shipping_fee(items), 0);
    match tier_for(items) {
        Some(tier) => info!(items, fee = %fee, "Flat tier {}-{}", tier.min, tier.max),
        None => info!(items, fee = %fee, "Bulk rate of ₹{BULK_RATE_PER_ITEM} per item"),
    }
}

/// Log the whole tier table.
pub fn tiers() {
    info!("Shipping tiers");
    info!("==============");
    for tier in &TIERS {
        info!("  {:>3}-{:<3} items: ₹{}", tier.min, tier.max, tier.fee);
    }
    if let Some(last) = TIERS.last() {
        info!(
            "  {}+ items: ₹{BULK_RATE_PER_ITEM} per item",
            last.max + 1
        );
    }
}
