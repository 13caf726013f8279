//! In-memory shopping cart and its derived totals.
//!
//! A [`Cart`] is a plain list of lines. It is serialized into the visitor's
//! session between requests, so it carries no references to the catalog.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::catalog::PRODUCT_IMAGES;
use crate::shipping::shipping_fee;
use crate::types::{Channel, ProductId, discount_percent};

/// Errors from cart mutations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CartError {
    #[error("item {0} is not in the cart")]
    LineNotFound(ProductId),
    #[error("quantity must be at most {}", u32::MAX)]
    QuantityTooLarge,
}

/// An item about to be added; the cart assigns the quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub original_price: Decimal,
    /// Falls back to the first product image when absent.
    pub image: Option<String>,
    /// Defaults to [`Channel::B2c`] when absent.
    pub channel: Option<Channel>,
}

/// A single cart line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartItem {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub original_price: Decimal,
    pub image: String,
    pub quantity: u32,
    pub channel: Channel,
}

impl CartItem {
    /// Unit price × quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.price * Decimal::from(self.quantity)
    }

    /// Whole-percent discount against the original price.
    #[must_use]
    pub fn discount_percent(&self) -> i64 {
        discount_percent(self.price, self.original_price)
    }
}

/// The visitor's cart.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    items: Vec<CartItem>,
}

impl Cart {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn items(&self) -> &[CartItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Add one unit of `item`. A line with the same id is incremented;
    /// otherwise a new line with quantity 1 is appended.
    pub fn add(&mut self, item: NewCartItem) {
        if let Some(line) = self.items.iter_mut().find(|line| line.id == item.id) {
            line.quantity = line.quantity.saturating_add(1);
            return;
        }

        self.items.push(CartItem {
            id: item.id,
            name: item.name,
            price: item.price,
            original_price: item.original_price,
            image: item
                .image
                .filter(|image| !image.is_empty())
                .unwrap_or_else(|| PRODUCT_IMAGES[0].to_owned()),
            quantity: 1,
            channel: item.channel.unwrap_or_default(),
        });
    }

    /// Remove the line for `id`. Returns whether a line was removed.
    pub fn remove(&mut self, id: &ProductId) -> bool {
        let before = self.items.len();
        self.items.retain(|line| &line.id != id);
        self.items.len() != before
    }

    /// Set the quantity of the line for `id`. Zero or less removes the line.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::LineNotFound`] if no such line exists and
    /// [`CartError::QuantityTooLarge`] if the quantity does not fit a `u32`.
    pub fn update_quantity(&mut self, id: &ProductId, quantity: i64) -> Result<(), CartError> {
        if quantity <= 0 {
            return if self.remove(id) {
                Ok(())
            } else {
                Err(CartError::LineNotFound(id.clone()))
            };
        }
        let line = self
            .items
            .iter_mut()
            .find(|line| &line.id == id)
            .ok_or_else(|| CartError::LineNotFound(id.clone()))?;
        line.quantity = u32::try_from(quantity).map_err(|_| CartError::QuantityTooLarge)?;
        Ok(())
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Sum of quantities across all lines.
    #[must_use]
    pub fn total_items(&self) -> u64 {
        self.items.iter().map(|line| u64::from(line.quantity)).sum()
    }

    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.items.iter().map(CartItem::line_total).sum()
    }

    /// Subtotal of wholesale (B2B) lines only.
    #[must_use]
    pub fn b2b_subtotal(&self) -> Decimal {
        self.items
            .iter()
            .filter(|line| line.channel == Channel::B2b)
            .map(CartItem::line_total)
            .sum()
    }

    #[must_use]
    pub fn shipping_cost(&self) -> Decimal {
        shipping_fee(self.total_items())
    }

    /// Subtotal plus shipping.
    #[must_use]
    pub fn total(&self) -> Decimal {
        self.subtotal() + self.shipping_cost()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn radiance() -> NewCartItem {
        NewCartItem {
            id: ProductId::new("luxeglow-face-cream"),
            name: "BIDUA Radiance 15".to_string(),
            price: Decimal::from(1499),
            original_price: Decimal::from(4999),
            image: None,
            channel: None,
        }
    }

    fn wholesale() -> NewCartItem {
        NewCartItem {
            id: ProductId::new("bidua-radiance-15"),
            name: "BIDUA Radiance 15 Cream".to_string(),
            price: Decimal::from(1150),
            original_price: Decimal::from(4999),
            image: Some("/static/images/product-2.jpg".to_string()),
            channel: Some(Channel::B2b),
        }
    }

    #[test]
    fn test_add_new_line_defaults() {
        let mut cart = Cart::new();
        cart.add(radiance());

        let line = &cart.items()[0];
        assert_eq!(line.quantity, 1);
        assert_eq!(line.channel, Channel::B2c);
        assert_eq!(line.image, PRODUCT_IMAGES[0]);
    }

    #[test]
    fn test_add_existing_increments() {
        let mut cart = Cart::new();
        cart.add(radiance());
        cart.add(radiance());
        cart.add(wholesale());

        assert_eq!(cart.items().len(), 2);
        assert_eq!(cart.items()[0].quantity, 2);
        assert_eq!(cart.total_items(), 3);
    }

    #[test]
    fn test_update_quantity_and_remove_on_zero() {
        let mut cart = Cart::new();
        cart.add(radiance());
        let id = ProductId::new("luxeglow-face-cream");

        cart.update_quantity(&id, 5).unwrap();
        assert_eq!(cart.total_items(), 5);

        cart.update_quantity(&id, 0).unwrap();
        assert!(cart.is_empty());
    }

    #[test]
    fn test_update_missing_line() {
        let mut cart = Cart::new();
        let id = ProductId::new("nope");
        assert_eq!(
            cart.update_quantity(&id, 2),
            Err(CartError::LineNotFound(id.clone()))
        );
        assert_eq!(
            cart.update_quantity(&id, -1),
            Err(CartError::LineNotFound(id))
        );
    }

    #[test]
    fn test_update_quantity_large_values() {
        let mut cart = Cart::new();
        cart.add(radiance());
        let id = ProductId::new("luxeglow-face-cream");

        assert_eq!(cart.update_quantity(&id, 10_001), Ok(()));
        assert_eq!(cart.total_items(), 10_001);

        assert_eq!(
            cart.update_quantity(&id, i64::from(u32::MAX) + 1),
            Err(CartError::QuantityTooLarge)
        );
        assert_eq!(cart.total_items(), 10_001);
    }

    #[test]
    fn test_totals() {
        let mut cart = Cart::new();
        cart.add(radiance());
        cart.add(radiance());
        cart.add(wholesale());

        assert_eq!(cart.subtotal(), Decimal::from(1499 * 2 + 1150));
        assert_eq!(cart.b2b_subtotal(), Decimal::from(1150));
        assert_eq!(cart.shipping_cost(), Decimal::from(100));
        assert_eq!(cart.total(), Decimal::from(1499 * 2 + 1150 + 100));
    }

    #[test]
    fn test_clear_and_empty_totals() {
        let mut cart = Cart::new();
        cart.add(radiance());
        cart.clear();

        assert!(cart.is_empty());
        assert_eq!(cart.total_items(), 0);
        assert_eq!(cart.shipping_cost(), Decimal::ZERO);
        assert_eq!(cart.total(), Decimal::ZERO);
    }

    #[test]
    fn test_line_discount() {
        let mut cart = Cart::new();
        cart.add(radiance());
        assert_eq!(cart.items()[0].discount_percent(), 70);
    }

    #[test]
    fn test_cart_serde_roundtrip_for_session() {
        let mut cart = Cart::new();
        cart.add(wholesale());
        let json = serde_json::to_string(&cart).unwrap();
        let parsed: Cart = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, cart);
    }
}
