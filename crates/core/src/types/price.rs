//! Rupee formatting and discount arithmetic.
//!
//! Cart amounts are whole rupees in practice, but they are kept as
//! [`Decimal`] so that subtotals never drift. Display follows the `en-IN`
//! convention: the last three integer digits are grouped, then every two
//! (`₹1,24,000`).

use rust_decimal::prelude::{FromPrimitive, ToPrimitive};
use rust_decimal::{Decimal, RoundingStrategy};

/// Format a rupee amount with exactly `fraction_digits` decimals.
///
/// ```
/// use bidua_core::format_inr;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_inr(Decimal::from(124_000), 0), "₹1,24,000");
/// assert_eq!(format_inr(Decimal::new(14_995, 1), 2), "₹1,499.50");
/// ```
#[must_use]
pub fn format_inr(amount: Decimal, fraction_digits: u32) -> String {
    let rounded =
        amount.round_dp_with_strategy(fraction_digits, RoundingStrategy::MidpointAwayFromZero);
    let (sign, digits) = split_sign(rounded);
    let text = format!("{:.*}", fraction_digits as usize, digits);
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = format!("{sign}₹{}", group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Format a floating-point rupee amount with exactly `fraction_digits` decimals.
///
/// Non-finite values render as zero. Amounts beyond [`Decimal`]'s range are
/// still printed in full.
#[must_use]
pub fn format_inr_f64(amount: f64, fraction_digits: u32) -> String {
    if !amount.is_finite() {
        return format_inr(Decimal::ZERO, fraction_digits);
    }
    Decimal::from_f64(amount).map_or_else(
        || format_wide(amount, fraction_digits as usize, "₹"),
        |amount| format_inr(amount, fraction_digits),
    )
}

/// Format a plain number in `en-IN` style with at most two fraction digits,
/// dropping trailing zeros (`12,345.5`, `40`).
#[must_use]
pub fn format_number(value: f64) -> String {
    if !value.is_finite() {
        return "0".to_owned();
    }
    let Some(value) = Decimal::from_f64(value) else {
        // Out of Decimal range, so there is no fraction worth showing.
        return format_wide(value, 0, "");
    };
    let rounded = value
        .round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        .normalize();
    let (sign, digits) = split_sign(rounded);
    let text = digits.to_string();
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let mut out = format!("{sign}{}", group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Discount of `price` relative to `original`, as a whole percentage.
///
/// Returns 0 when there is no original price to compare against.
#[must_use]
pub fn discount_percent(price: Decimal, original: Decimal) -> i64 {
    if original.is_zero() {
        return 0;
    }
    ((Decimal::ONE - price / original) * Decimal::ONE_HUNDRED)
        .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
        .to_i64()
        .unwrap_or(0)
}

fn split_sign(value: Decimal) -> (&'static str, Decimal) {
    if value.is_sign_negative() && !value.is_zero() {
        ("-", value.abs())
    } else {
        ("", value.abs())
    }
}

/// Group a finite `f64` too large for [`Decimal`] using float formatting.
fn format_wide(value: f64, fraction_digits: usize, symbol: &str) -> String {
    let sign = if value.is_sign_negative() { "-" } else { "" };
    let text = format!("{:.*}", fraction_digits, value.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));

    let mut out = format!("{sign}{symbol}{}", group_indian(int_part));
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}

/// Group integer digits the Indian way: `1234567` -> `12,34,567`.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_owned();
    }
    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (front, back) = rest.split_at(rest.len() - 2);
        groups.push(back);
        rest = front;
    }
    if !rest.is_empty() {
        groups.push(rest);
    }
    groups.reverse();
    format!("{},{tail}", groups.join(","))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_indian() {
        assert_eq!(group_indian("0"), "0");
        assert_eq!(group_indian("999"), "999");
        assert_eq!(group_indian("1499"), "1,499");
        assert_eq!(group_indian("124000"), "1,24,000");
        assert_eq!(group_indian("12345678"), "1,23,45,678");
    }

    #[test]
    fn test_format_inr_whole_rupees() {
        assert_eq!(format_inr(Decimal::from(1499), 0), "₹1,499");
        assert_eq!(format_inr(Decimal::from(150_000), 0), "₹1,50,000");
        assert_eq!(format_inr(Decimal::ZERO, 0), "₹0");
    }

    #[test]
    fn test_format_inr_fraction_digits() {
        assert_eq!(format_inr(Decimal::new(12345, 2), 2), "₹123.45");
        assert_eq!(format_inr(Decimal::new(12345, 2), 0), "₹123");
        assert_eq!(format_inr(Decimal::new(-25050, 2), 2), "-₹250.50");
    }

    #[test]
    fn test_format_inr_f64_handles_non_finite() {
        assert_eq!(format_inr_f64(f64::NAN, 2), "₹0.00");
        assert_eq!(format_inr_f64(150.0, 2), "₹150.00");
    }

    #[test]
    fn test_huge_amounts_are_not_zeroed() {
        let inr = format_inr_f64(1e30, 2);
        assert!(inr.starts_with("₹10,00,00,00"), "{inr}");
        assert!(inr.ends_with(".00"), "{inr}");

        let negative = format_inr_f64(-1e30, 0);
        assert!(negative.starts_with("-₹10,00,00"), "{negative}");
        assert!(!negative.contains('.'));

        assert_eq!(
            format_number(-(2f64.powi(100))),
            "-12,67,65,06,00,22,82,29,40,14,96,70,32,05,376"
        );
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(40.0), "40");
        assert_eq!(format_number(5000.0), "5,000");
        assert_eq!(format_number(38.461_538), "38.46");
        assert_eq!(format_number(-12.5), "-12.5");
    }

    #[test]
    fn test_discount_percent() {
        assert_eq!(
            discount_percent(Decimal::from(1499), Decimal::from(4999)),
            70
        );
        assert_eq!(discount_percent(Decimal::from(10), Decimal::ZERO), 0);
        assert_eq!(
            discount_percent(Decimal::from(1150), Decimal::from(4999)),
            77
        );
    }
}
