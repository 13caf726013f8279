//! Custom Askama template filters.
//!
//! Money is rendered the Indian way (`₹1,24,000`). The filters take any
//! `Display` value, so they work on `Decimal` amounts and `f64` calculator
//! results alike.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;
use std::str::FromStr;

use bidua_core::{format_inr, format_inr_f64, format_number};
use rust_decimal::Decimal;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the content hash for main.css.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|css_hash }}`
#[askama::filter_fn]
pub fn css_hash(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<&'static str> {
    Ok(env!("CSS_HASH"))
}

/// Whole rupees: `{{ cart.subtotal|inr }}` renders `₹1,499`.
#[askama::filter_fn]
pub fn inr(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(rupees(&value.to_string(), 0))
}

/// Rupees and paise: `{{ row.cost_per_jar|inr2 }}` renders `₹231.66`.
#[askama::filter_fn]
pub fn inr2(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(rupees(&value.to_string(), 2))
}

/// Plain quantity, at most two decimals: `{{ row.batch_quantity|qty }}`.
#[askama::filter_fn]
pub fn qty(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let text = value.to_string();
    Ok(text
        .parse::<f64>()
        .map_or(text, format_number))
}

/// Fraction as a percentage with two decimals: `0.25` renders `25.00%`.
#[askama::filter_fn]
pub fn percent(value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let text = value.to_string();
    Ok(text
        .parse::<f64>()
        .map_or(text, |fraction| format!("{:.2}%", fraction * 100.0)))
}

fn rupees(text: &str, fraction_digits: u32) -> String {
    Decimal::from_str(text).map_or_else(
        |_| {
            text.parse::<f64>()
                .map_or_else(|_| text.to_owned(), |v| format_inr_f64(v, fraction_digits))
        },
        |amount| format_inr(amount, fraction_digits),
    )
}
