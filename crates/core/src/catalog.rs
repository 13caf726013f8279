//! Seeded catalog and partner-program records.
//!
//! Everything here is static demo data. Nothing is ever mutated: the queue
//! tracker, wallet and B2B catalog all read from these constructors.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::cart::NewCartItem;
use crate::types::{
    Channel, ProductId, QueueOrderId, QueueStatus, RealizationId, RealizationStatus,
    SerialNumber, StockStatus, UserId, discount_percent,
};

/// Product photography, in gallery order.
pub const PRODUCT_IMAGES: [&str; 3] = [
    "/static/images/radiance-15-front.svg",
    "/static/images/radiance-15-open.svg",
    "/static/images/radiance-15-pack.svg",
];

pub const PRODUCT_ALT_TEXT: &str = "BIDUA Radiance 15 face cream jar";

/// Annual BRPP membership fee in rupees.
pub const BRPP_ANNUAL_FEE: i64 = 4999;

/// SKU tracked by the allocation queue.
const RADIANCE_SKU: &str = "BIDUA Radiance 15";

/// The retail product sold on the landing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub price: Decimal,
    pub original_price: Decimal,
    pub image: String,
}

impl Product {
    /// Whole-percent saving against the original price.
    #[must_use]
    pub fn discount_percent(&self) -> i64 {
        discount_percent(self.price, self.original_price)
    }

    #[must_use]
    pub fn to_cart_item(&self) -> NewCartItem {
        NewCartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.price,
            original_price: self.original_price,
            image: Some(self.image.clone()),
            channel: Some(Channel::B2c),
        }
    }
}

/// BIDUA Radiance 15, 50 g.
#[must_use]
pub fn featured_product() -> Product {
    Product {
        id: ProductId::new("luxeglow-face-cream"),
        name: RADIANCE_SKU.to_string(),
        price: Decimal::from(1499),
        original_price: Decimal::from(4999),
        image: PRODUCT_IMAGES[0].to_string(),
    }
}

/// Wholesale listing for BRPP partners.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct B2bProduct {
    pub id: ProductId,
    pub name: String,
    pub b2b_price: Decimal,
    pub mrp: Decimal,
    pub min_order_qty: u32,
    pub image: String,
    pub description: String,
}

impl B2bProduct {
    /// Wholesale saving against MRP, in whole percent.
    #[must_use]
    pub fn discount_percent(&self) -> i64 {
        discount_percent(self.b2b_price, self.mrp)
    }

    /// Cart line priced at the wholesale rate, compared against MRP.
    #[must_use]
    pub fn to_cart_item(&self) -> NewCartItem {
        NewCartItem {
            id: self.id.clone(),
            name: self.name.clone(),
            price: self.b2b_price,
            original_price: self.mrp,
            image: Some(self.image.clone()),
            channel: Some(Channel::B2b),
        }
    }
}

#[must_use]
pub fn b2b_products() -> Vec<B2bProduct> {
    vec![
        B2bProduct {
            id: ProductId::new("bidua-radiance-15"),
            name: "BIDUA Radiance 15 Cream".to_string(),
            b2b_price: Decimal::from(1150),
            mrp: Decimal::from(4999),
            min_order_qty: 10,
            image: PRODUCT_IMAGES[0].to_string(),
            description: "Premium skincare cream for dark spots, sun damage, and natural glow."
                .to_string(),
        },
        B2bProduct {
            id: ProductId::new("bidua-radiance-15-bundle"),
            name: "BIDUA Radiance 15 (Pack of 3)".to_string(),
            b2b_price: Decimal::from(2800),
            mrp: Decimal::from(4999 * 3),
            min_order_qty: 5,
            image: PRODUCT_IMAGES[1].to_string(),
            description: "Value pack of 3 BIDUA Radiance 15 creams for extended use.".to_string(),
        },
        B2bProduct {
            id: ProductId::new("bidua-radiance-15-pro"),
            name: "BIDUA Radiance 15 Pro (Large)".to_string(),
            b2b_price: Decimal::from(1800),
            mrp: Decimal::from(7999),
            min_order_qty: 8,
            image: PRODUCT_IMAGES[2].to_string(),
            description: "Larger size of BIDUA Radiance 15 for professional use.".to_string(),
        },
    ]
}

#[must_use]
pub fn find_b2b_product(id: &ProductId) -> Option<B2bProduct> {
    b2b_products().into_iter().find(|product| &product.id == id)
}

/// A serialized unit in global stock.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StockUnit {
    pub serial: SerialNumber,
    pub sku: String,
    pub status: StockStatus,
    pub buyer: Option<String>,
    pub sold_on: Option<NaiveDate>,
}

/// Units `SN-001` through `SN-020`; the first five are sold.
#[must_use]
pub fn global_stock() -> Vec<StockUnit> {
    let buyers = ["User A", "User B", "User C", "User D", "User E"];
    (1..=20_u32)
        .map(|n| {
            let buyer = usize::try_from(n - 1)
                .ok()
                .and_then(|index| buyers.get(index));
            StockUnit {
                serial: SerialNumber::new(format!("SN-{n:03}")),
                sku: RADIANCE_SKU.to_string(),
                status: if buyer.is_some() {
                    StockStatus::Sold
                } else {
                    StockStatus::Available
                },
                buyer: buyer.map(|name| (*name).to_string()),
                sold_on: buyer.and_then(|_| NaiveDate::from_ymd_opt(2025, 1, n)),
            }
        })
        .collect()
}

/// An order waiting for stock allocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueuedOrder {
    pub order_id: QueueOrderId,
    pub user_id: UserId,
    pub sku: String,
    pub quantity: u32,
    pub status: QueueStatus,
    pub position: u32,
    pub estimated_delivery: Option<NaiveDate>,
    pub serial_range: String,
}

#[must_use]
pub fn queued_orders() -> Vec<QueuedOrder> {
    let rows: [(&str, &str, u32, u32, &str); 5] = [
        ("Q-001", "user-1234", 2, 25, "SN-006 to SN-007"),
        ("Q-002", "user-5678", 1, 26, "SN-008"),
        ("Q-003", "user-1234", 3, 28, "SN-009 to SN-011"),
        ("Q-004", "user-9012", 1, 29, "SN-012"),
        ("Q-005", "user-1234", 1, 30, "SN-013"),
    ];

    rows.iter()
        .zip(1..)
        .map(|(&(order_id, user_id, quantity, day, range), position)| QueuedOrder {
            order_id: QueueOrderId::new(order_id),
            user_id: UserId::new(user_id),
            sku: RADIANCE_SKU.to_string(),
            quantity,
            status: QueueStatus::Pending,
            position,
            estimated_delivery: NaiveDate::from_ymd_opt(2025, 1, day),
            serial_range: range.to_string(),
        })
        .collect()
}

/// Queue entries belonging to `user`, in queue order.
#[must_use]
pub fn queued_orders_for(user: &UserId) -> Vec<QueuedOrder> {
    queued_orders()
        .into_iter()
        .filter(|order| &order.user_id == user)
        .collect()
}

/// A partner sale that moved money into the wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Realization {
    pub id: RealizationId,
    pub sku: String,
    pub serial_no: SerialNumber,
    pub b2c_price: Decimal,
    pub partner_cost: Decimal,
    pub profit_share: Decimal,
    pub cost_reimbursed: Decimal,
    pub status: RealizationStatus,
    pub confirmed_at: Option<NaiveDate>,
    pub return_window_ends: Option<NaiveDate>,
}

/// Partner wallet snapshot.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PartnerWallet {
    pub available_balance: Decimal,
    pub escrow_pending: Decimal,
    pub total_realized: Decimal,
    pub realizations: Vec<Realization>,
}

#[must_use]
pub fn partner_wallet() -> PartnerWallet {
    let realization = |id: &str,
                       sku: &str,
                       serial: &str,
                       (b2c, cost, share): (i64, i64, i64),
                       status: RealizationStatus,
                       day: u32| {
        let date = NaiveDate::from_ymd_opt(2024, 9, day);
        Realization {
            id: RealizationId::new(id),
            sku: sku.to_string(),
            serial_no: SerialNumber::new(serial),
            b2c_price: Decimal::from(b2c),
            partner_cost: Decimal::from(cost),
            profit_share: Decimal::from(share),
            cost_reimbursed: Decimal::from(cost),
            status,
            confirmed_at: matches!(status, RealizationStatus::Confirmed)
                .then_some(date)
                .flatten(),
            return_window_ends: matches!(status, RealizationStatus::EscrowPending)
                .then_some(date)
                .flatten(),
        }
    };

    PartnerWallet {
        available_balance: Decimal::from(124_000),
        escrow_pending: Decimal::from(15_000),
        total_realized: Decimal::from(150_000),
        realizations: vec![
            realization(
                "real-001",
                RADIANCE_SKU,
                "SN-21",
                (1400, 1000, 240),
                RealizationStatus::Confirmed,
                10,
            ),
            realization(
                "real-002",
                RADIANCE_SKU,
                "SN-22",
                (1400, 1000, 240),
                RealizationStatus::Confirmed,
                10,
            ),
            realization(
                "real-003",
                RADIANCE_SKU,
                "SN-23",
                (1400, 1000, 240),
                RealizationStatus::EscrowPending,
                25,
            ),
            realization(
                "real-004",
                "BIDUA Radiance 15 (Pack of 3)",
                "SN-101",
                (4000, 2800, 720),
                RealizationStatus::EscrowPending,
                28,
            ),
        ],
    }
}

/// Landing-page copy block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Highlight {
    pub title: &'static str,
    pub description: &'static str,
}

/// A customer quote shown on the landing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Testimonial {
    pub name: &'static str,
    pub location: &'static str,
    pub rating: u8,
    pub text: &'static str,
}

impl Testimonial {
    /// Rating as filled stars, e.g. `★★★★★`.
    #[must_use]
    pub fn stars(&self) -> String {
        "★".repeat(usize::from(self.rating.min(5)))
    }
}

pub const BENEFITS: [Highlight; 6] = [
    Highlight {
        title: "Reduces Dark Spots & Pigmentation",
        description: "Powered by Alpha Arbutin, Saffron Oil & Vitamin B3 to fade marks and even skin tone.",
    },
    Highlight {
        title: "Brightens Skin Tone",
        description: "Restores natural color to match the nose-tip tone (the true skin tone).",
    },
    Highlight {
        title: "Anti-Aging Care",
        description: "Vitamins A, C, and E reduce fine lines & wrinkles while promoting youthful skin.",
    },
    Highlight {
        title: "Sun Protection & Damage Repair",
        description: "With Zinc Oxide + Vitamin E to protect and heal sun-damaged skin.",
    },
    Highlight {
        title: "Hydration & Softness",
        description: "Natural wax, glycerin, and almond nourish deeply for lasting moisture.",
    },
    Highlight {
        title: "Visible Results",
        description: "Within 15 days at night and 30 days with daily use.",
    },
];

pub const KEY_INGREDIENTS: [Highlight; 6] = [
    Highlight {
        title: "Saffron Oil",
        description: "Premium saffron extract that helps reduce dark circles and provides natural glow.",
    },
    Highlight {
        title: "Alpha Arbutin",
        description: "A natural brightening agent that helps fade dark spots and patches safely.",
    },
    Highlight {
        title: "Vitamin B3 (Niacinamide)",
        description: "Brightens skin, reduces dark spots, and strengthens the skin barrier.",
    },
    Highlight {
        title: "Vitamin C",
        description: "Antioxidant that brightens skin tone and protects against free radicals.",
    },
    Highlight {
        title: "Zinc Oxide",
        description: "Natural sun protection that prevents UV damage and soothes irritation.",
    },
    Highlight {
        title: "Almond Powder",
        description: "Rich in Vitamin E and healthy fats; nourishes and softens skin.",
    },
];

pub const TESTIMONIALS: [Testimonial; 3] = [
    Testimonial {
        name: "Priya Sharma",
        location: "Mumbai, India",
        rating: 5,
        text: "The saffron oil formula cleared my dark circles in 30 days.",
    },
    Testimonial {
        name: "Anjali Patel",
        location: "Delhi, India",
        rating: 5,
        text: "Natural ingredients that work. My husband and I both use it.",
    },
    Testimonial {
        name: "Kavya Reddy",
        location: "Bangalore, India",
        rating: 5,
        text: "My dark spots faded completely. I apply it thick at night as recommended.",
    },
];

/// A how-to-use routine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct UsageGuide {
    pub title: &'static str,
    pub steps: &'static [&'static str],
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Faq {
    pub question: &'static str,
    pub answer: &'static str,
}

pub const UNIQUE_FEATURES: [Highlight; 5] = [
    Highlight {
        title: "Daily Repair & Glow",
        description: "Keeps skin hydrated, nourished, and naturally bright.",
    },
    Highlight {
        title: "Dark Spot & Pigmentation Solution",
        description: "Works deeply to fade marks and restore even skin tone.",
    },
    Highlight {
        title: "Day & Night Care",
        description: "Protects in the day, repairs at night for 24/7 skincare.",
    },
    Highlight {
        title: "Multi-Purpose Formula",
        description: "Safe for adults and babies - gentle yet effective.",
    },
    Highlight {
        title: "Visible Results",
        description: "Noticeable improvements within 15–30 days of consistent use.",
    },
];

pub const USAGE_GUIDES: [UsageGuide; 3] = [
    UsageGuide {
        title: "For Daytime Use",
        steps: &[
            "Wash your face with a mild cleanser",
            "Apply a thin layer of cream evenly on face, under-eye, and neck",
            "Massage gently until absorbed",
            "Acts as a moisturizer + natural protector",
        ],
    },
    UsageGuide {
        title: "For Nighttime Use (Special Repair)",
        steps: &[
            "Cleanse your skin before bedtime",
            "Apply a slightly thick layer on dark circles and affected areas",
            "Leave overnight for deep repair",
            "Within 15 days, reduces dark circles and restores natural glow",
        ],
    },
    UsageGuide {
        title: "For Baby Rashes",
        steps: &[
            "Apply a thin layer on clean, dry skin",
            "Gently massage to soothe diaper rashes",
            "Prevents redness and promotes healing",
        ],
    },
];

pub const WHO_CAN_USE: [&str; 4] = [
    "Men & women of all ages",
    "All skin types (dry, oily, sensitive, combination)",
    "Safe for babies (for diaper rashes)",
    "Suitable for daily, long-term use",
];

pub const FAQS: [Faq; 5] = [
    Faq {
        question: "How soon will I see results?",
        answer: "Night use (thick layer): Dark spots & circles reduce within 15 days. Daily use (thin layer): Skin becomes brighter & smoother in 30 days.",
    },
    Faq {
        question: "Is it safe for sensitive skin?",
        answer: "It is made with natural ingredients and free from parabens, sulfates, and harsh chemicals. A patch test is mandatory before use: test on your inner wrist or behind your ear and wait 24-48 hours.",
    },
    Faq {
        question: "Can men use it?",
        answer: "Absolutely. Our cream works for both men and women of all ages.",
    },
    Faq {
        question: "Does it protect from the sun?",
        answer: "Yes, Zinc Oxide acts as a natural sunscreen, providing protection against harmful UV rays while nourishing your skin.",
    },
    Faq {
        question: "What about after waxing or other treatments?",
        answer: "After facial waxing, threading, chemical peels, or laser treatments, wait 48-72 hours before applying. Never apply a thick layer on freshly treated skin; start with a very thin layer.",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_global_stock_split() {
        let stock = global_stock();
        assert_eq!(stock.len(), 20);
        let sold: Vec<_> = stock
            .iter()
            .filter(|unit| unit.status == StockStatus::Sold)
            .collect();
        assert_eq!(sold.len(), 5);
        assert_eq!(sold[0].serial.as_str(), "SN-001");
        assert_eq!(sold[0].buyer.as_deref(), Some("User A"));
        assert!(stock[5].buyer.is_none());
        assert_eq!(stock[19].serial.as_str(), "SN-020");
    }

    #[test]
    fn test_queue_filtered_by_user() {
        let mine = queued_orders_for(&UserId::new("user-1234"));
        let ids: Vec<_> = mine.iter().map(|o| o.order_id.as_str()).collect();
        assert_eq!(ids, ["Q-001", "Q-003", "Q-005"]);
        assert_eq!(mine[1].position, 3);

        assert!(queued_orders_for(&UserId::new("user-0000")).is_empty());
    }

    #[test]
    fn test_b2b_product_to_cart_item() {
        let product = find_b2b_product(&ProductId::new("bidua-radiance-15-bundle"));
        let item = product.map(|p| p.to_cart_item());
        let item = item.as_ref();
        assert_eq!(item.map(|i| i.price), Some(Decimal::from(2800)));
        assert_eq!(item.map(|i| i.original_price), Some(Decimal::from(14_997)));
        assert_eq!(item.and_then(|i| i.channel), Some(Channel::B2b));
    }

    #[test]
    fn test_discounts() {
        assert_eq!(featured_product().discount_percent(), 70);
        let percents: Vec<_> = b2b_products().iter().map(B2bProduct::discount_percent).collect();
        assert_eq!(percents, [77, 81, 77]);
    }

    #[test]
    fn test_unknown_b2b_product() {
        assert!(find_b2b_product(&ProductId::new("missing")).is_none());
    }

    #[test]
    fn test_wallet_realizations() {
        let wallet = partner_wallet();
        assert_eq!(wallet.realizations.len(), 4);
        let escrow = wallet
            .realizations
            .iter()
            .filter(|r| r.status == RealizationStatus::EscrowPending)
            .count();
        assert_eq!(escrow, 2);
        assert!(wallet.realizations[0].confirmed_at.is_some());
        assert!(wallet.realizations[0].return_window_ends.is_none());
        assert!(wallet.realizations[3].return_window_ends.is_some());
    }
}
