//! Status and tag enums shared by the cart and the partner pages.

use serde::{Deserialize, Serialize};

/// Pricing channel of a cart line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Channel {
    /// Direct-to-consumer retail price.
    #[default]
    B2c,
    /// Wholesale price for BRPP partners.
    B2b,
}

impl Channel {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::B2c => "B2C",
            Self::B2b => "B2B",
        }
    }
}

/// Allocation state of a serialized stock unit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StockStatus {
    Sold,
    Available,
}

/// State of an order waiting in the allocation queue.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QueueStatus {
    Pending,
    Allocated,
}

impl QueueStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Pending => "Pending",
            Self::Allocated => "Allocated",
        }
    }
}

/// Settlement state of a partner realization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RealizationStatus {
    /// Return window closed; funds released to the wallet.
    Confirmed,
    /// Held until the return window ends.
    EscrowPending,
}

impl RealizationStatus {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Confirmed => "Confirmed",
            Self::EscrowPending => "Escrow Pending",
        }
    }
}

/// Payment method chosen at checkout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum PaymentMethod {
    #[default]
    Card,
    Upi,
    Cod,
}

impl PaymentMethod {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Card => "Credit/Debit Card",
            Self::Upi => "UPI",
            Self::Cod => "Cash on Delivery",
        }
    }

    /// Value used in form fields.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Card => "card",
            Self::Upi => "upi",
            Self::Cod => "cod",
        }
    }

    /// Payment status printed on the receipt.
    #[must_use]
    pub const fn receipt_status(self) -> &'static str {
        match self {
            Self::Card | Self::Upi => "PAID",
            Self::Cod => "DUE ON DELIVERY",
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_serde() {
        assert_eq!(serde_json::to_string(&Channel::B2b).unwrap(), "\"b2b\"");
        let parsed: Channel = serde_json::from_str("\"b2c\"").unwrap();
        assert_eq!(parsed, Channel::B2c);
        assert_eq!(Channel::default(), Channel::B2c);
    }

    #[test]
    fn test_payment_method_from_form_value() {
        let parsed: PaymentMethod = serde_json::from_str("\"upi\"").unwrap();
        assert_eq!(parsed, PaymentMethod::Upi);
        assert_eq!(parsed.as_str(), "upi");
        assert_eq!(PaymentMethod::Cod.receipt_status(), "DUE ON DELIVERY");
    }

    #[test]
    fn test_realization_labels() {
        assert_eq!(RealizationStatus::EscrowPending.label(), "Escrow Pending");
        assert_eq!(
            serde_json::to_string(&RealizationStatus::EscrowPending).unwrap(),
            "\"escrow_pending\""
        );
    }
}
