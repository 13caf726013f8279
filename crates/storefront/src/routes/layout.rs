//! Data every full page needs for the shared header and footer.

use tower_sessions::Session;

use crate::middleware::current_user;
use crate::models::CurrentUser;
use crate::routes::cart::load_cart;

/// Header state: cart badge and who is signed in.
#[derive(Debug, Clone, Default)]
pub struct Layout {
    pub cart_count: u64,
    pub user: Option<CurrentUser>,
}

impl Layout {
    /// Read header state from the session.
    ///
    /// A session that cannot be read renders as an anonymous visitor with an
    /// empty cart; the page itself still loads.
    pub async fn load(session: &Session) -> Self {
        let cart_count = match load_cart(session).await {
            Ok(cart) => cart.total_items(),
            Err(e) => {
                tracing::warn!("Failed to read cart for header: {e}");
                0
            }
        };

        Self {
            cart_count,
            user: current_user(session).await,
        }
    }

    #[must_use]
    pub const fn signed_in(&self) -> bool {
        self.user.is_some()
    }
}
