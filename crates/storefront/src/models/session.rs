//! Session-related types.
//!
//! Everything a visitor accumulates (cart, login, last order, calculator
//! edits) is stored in their in-memory session under the keys below.

use serde::{Deserialize, Serialize};

use bidua_core::UserId;
use bidua_core::auth::DemoUser;

/// Session-stored user identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    pub id: UserId,
    pub email: String,
    /// Whether the account belongs to a BRPP partner.
    pub brpp_member: bool,
}

impl From<DemoUser> for CurrentUser {
    fn from(user: DemoUser) -> Self {
        Self {
            id: user.id,
            email: user.email,
            brpp_member: user.brpp_member,
        }
    }
}

/// Session keys.
pub mod keys {
    /// Key for storing the current logged-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Key for the visitor's cart.
    pub const CART: &str = "cart";

    /// Key for the receipt of the most recently placed order.
    pub const LAST_RECEIPT: &str = "last_receipt";

    /// Key set once the cost calculator has been unlocked.
    pub const CALCULATOR_UNLOCKED: &str = "calculator_unlocked";

    /// Key for the calculator inputs as last edited.
    pub const CALCULATOR_INPUTS: &str = "calculator_inputs";

    /// Key for BRPP membership progress.
    pub const MEMBERSHIP: &str = "brpp_membership";
}
