//! Application state shared across handlers.

use std::sync::Arc;

use bidua_core::auth::DemoCredentials;

use crate::config::StorefrontConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Per-visitor data (cart, login,
/// receipts) lives in the session, never here.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    credentials: DemoCredentials,
}

impl AppState {
    /// Create a new application state.
    #[must_use]
    pub fn new(config: StorefrontConfig) -> Self {
        let credentials = config.demo_credentials();
        Self {
            inner: Arc::new(AppStateInner {
                config,
                credentials,
            }),
        }
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// The credential pair accepted by the demo login and calculator gate.
    #[must_use]
    pub fn credentials(&self) -> &DemoCredentials {
        &self.inner.credentials
    }
}
