//! Checkout details and the receipt produced when an order is placed.

use chrono::{DateTime, Days, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::cart::{Cart, CartItem};
use crate::types::contact::required;
use crate::types::{ContactError, Email, PaymentMethod, Phone, Pincode, format_inr};

/// Days between placing an order and its estimated delivery.
pub const DELIVERY_DAYS: u64 = 5;

/// Seller details printed on every receipt.
pub mod seller {
    pub const NAME: &str = "BIDUA Industries Private Limited";
    pub const GST_NUMBER: &str = "29ABCDE1234F1Z5";
    pub const ADDRESS_LINE_1: &str = "Plot No. 456, Industrial Area, Phase 2";
    pub const ADDRESS_LINE_2: &str = "Electronic City, Bengaluru, Karnataka 560100";
    pub const PHONE: &str = "+91 80 4567 8900";
    pub const ORDERS_EMAIL: &str = "orders@biduaindustries.com";
    pub const SUPPORT_EMAIL: &str = "support@biduaindustries.com";
    pub const WEBSITE: &str = "www.biduaindustries.com";
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum OrderError {
    #[error("your cart is empty")]
    EmptyCart,
}

/// Checkout form contents as typed. Defaults to the demo customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerForm {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: String,
    pub payment_method: PaymentMethod,
}

impl Default for CustomerForm {
    fn default() -> Self {
        Self {
            first_name: "Rajesh".to_string(),
            last_name: "Kumar".to_string(),
            email: "rajesh.kumar@email.com".to_string(),
            phone: "+91 98765 43210".to_string(),
            address: "123 MG Road".to_string(),
            city: "Mumbai".to_string(),
            state: "Maharashtra".to_string(),
            pincode: "400001".to_string(),
            payment_method: PaymentMethod::Card,
        }
    }
}

impl CustomerForm {
    /// Check every field, stopping at the first problem.
    ///
    /// # Errors
    ///
    /// Returns the [`ContactError`] for the first blank or malformed field.
    pub fn validate(&self) -> Result<Customer, ContactError> {
        Ok(Customer {
            first_name: required("First name", &self.first_name)?,
            last_name: required("Last name", &self.last_name)?,
            email: Email::parse(&required("Email", &self.email)?)?,
            phone: Phone::parse(&required("Phone", &self.phone)?)?,
            address: required("Address", &self.address)?,
            city: required("City", &self.city)?,
            state: required("State", &self.state)?,
            pincode: Pincode::parse(&required("Pincode", &self.pincode)?)?,
            payment_method: self.payment_method,
        })
    }
}

/// Validated checkout details.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub first_name: String,
    pub last_name: String,
    pub email: Email,
    pub phone: Phone,
    pub address: String,
    pub city: String,
    pub state: String,
    pub pincode: Pincode,
    pub payment_method: PaymentMethod,
}

impl Customer {
    #[must_use]
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }

    /// Single-line postal address, e.g. "123 MG Road, Mumbai, Maharashtra 400001".
    #[must_use]
    pub fn postal_address(&self) -> String {
        format!(
            "{}, {}, {} {}",
            self.address, self.city, self.state, self.pincode
        )
    }
}

/// Snapshot of a placed order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrderReceipt {
    /// `LG` followed by six digits.
    pub order_number: String,
    /// `TXN` followed by eight digits.
    pub transaction_id: String,
    pub placed_at: DateTime<Utc>,
    pub estimated_delivery: NaiveDate,
    pub customer: Customer,
    pub items: Vec<CartItem>,
    pub total_items: u64,
    pub subtotal: Decimal,
    pub shipping: Decimal,
    pub total: Decimal,
}

impl OrderReceipt {
    /// Freeze the cart into a receipt. The cart itself is left untouched.
    ///
    /// # Errors
    ///
    /// Returns [`OrderError::EmptyCart`] when there is nothing to order.
    pub fn place(
        cart: &Cart,
        customer: Customer,
        placed_at: DateTime<Utc>,
    ) -> Result<Self, OrderError> {
        if cart.is_empty() {
            return Err(OrderError::EmptyCart);
        }

        let millis = placed_at.timestamp_millis().rem_euclid(100_000_000);
        let estimated_delivery = placed_at
            .date_naive()
            .checked_add_days(Days::new(DELIVERY_DAYS))
            .unwrap_or(NaiveDate::MAX);

        Ok(Self {
            order_number: format!("LG{:06}", millis % 1_000_000),
            transaction_id: format!("TXN{millis:08}"),
            placed_at,
            estimated_delivery,
            customer,
            items: cart.items().to_vec(),
            total_items: cart.total_items(),
            subtotal: cart.subtotal(),
            shipping: cart.shipping_cost(),
            total: cart.total(),
        })
    }

    /// Shipping as printed: `FREE` when nothing is charged.
    #[must_use]
    pub fn shipping_label(&self) -> String {
        if self.shipping.is_zero() {
            "FREE".to_string()
        } else {
            format_inr(self.shipping, 0)
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::catalog::featured_product;

    fn placed_at() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0).unwrap()
    }

    fn cart() -> Cart {
        let mut cart = Cart::new();
        cart.add(featured_product().to_cart_item());
        cart.add(featured_product().to_cart_item());
        cart
    }

    #[test]
    fn test_default_form_is_valid() {
        let customer = CustomerForm::default().validate().unwrap();
        assert_eq!(customer.full_name(), "Rajesh Kumar");
        assert_eq!(
            customer.postal_address(),
            "123 MG Road, Mumbai, Maharashtra 400001"
        );
    }

    #[test]
    fn test_form_rejects_blank_and_malformed() {
        let blank_city = CustomerForm {
            city: "  ".to_string(),
            ..CustomerForm::default()
        };
        assert_eq!(blank_city.validate(), Err(ContactError::Required("City")));

        let bad_email = CustomerForm {
            email: "rajesh".to_string(),
            ..CustomerForm::default()
        };
        assert_eq!(bad_email.validate(), Err(ContactError::InvalidEmail));

        let bad_pin = CustomerForm {
            pincode: "4000".to_string(),
            ..CustomerForm::default()
        };
        assert_eq!(bad_pin.validate(), Err(ContactError::InvalidPincode));
    }

    #[test]
    fn test_place_snapshots_cart() {
        let customer = CustomerForm::default().validate().unwrap();
        let receipt = OrderReceipt::place(&cart(), customer, placed_at()).unwrap();

        assert_eq!(receipt.items.len(), 1);
        assert_eq!(receipt.total_items, 2);
        assert_eq!(receipt.subtotal, Decimal::from(2998));
        assert_eq!(receipt.shipping, Decimal::from(100));
        assert_eq!(receipt.total, Decimal::from(3098));
        assert_eq!(
            receipt.estimated_delivery,
            NaiveDate::from_ymd_opt(2025, 3, 19).unwrap()
        );
    }

    #[test]
    fn test_reference_numbers_shape() {
        let customer = CustomerForm::default().validate().unwrap();
        let receipt = OrderReceipt::place(&cart(), customer, placed_at()).unwrap();

        assert!(receipt.order_number.starts_with("LG"));
        assert_eq!(receipt.order_number.len(), 8);
        assert!(receipt.order_number[2..].chars().all(|c| c.is_ascii_digit()));

        assert!(receipt.transaction_id.starts_with("TXN"));
        assert_eq!(receipt.transaction_id.len(), 11);
        assert!(receipt.transaction_id.ends_with(&receipt.order_number[2..]));
    }

    #[test]
    fn test_empty_cart_cannot_be_placed() {
        let customer = CustomerForm::default().validate().unwrap();
        assert_eq!(
            OrderReceipt::place(&Cart::new(), customer, placed_at()),
            Err(OrderError::EmptyCart)
        );
    }

    #[test]
    fn test_shipping_label() {
        let customer = CustomerForm::default().validate().unwrap();
        let mut receipt = OrderReceipt::place(&cart(), customer, placed_at()).unwrap();
        assert_eq!(receipt.shipping_label(), "₹100");
        receipt.shipping = Decimal::ZERO;
        assert_eq!(receipt.shipping_label(), "FREE");
    }
}
