//! Session middleware configuration.
//!
//! Sessions live in a process-local moka cache and are lost on restart.
//! Each record is evicted once its expiry date passes, and the cache is
//! bounded so an idle crowd of visitors cannot grow it without limit.

use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_moka_store::MokaStore;

use crate::config::StorefrontConfig;

/// Session cookie name.
pub const SESSION_COOKIE_NAME: &str = "bidua_session";

/// Session expiry time in seconds (1 day of inactivity).
const SESSION_EXPIRY_SECONDS: i64 = 24 * 60 * 60;

/// Most sessions held at once; least recently used ones are dropped first.
const MAX_SESSIONS: u64 = 100_000;

/// Create the in-memory session store.
#[must_use]
pub fn create_session_store() -> MokaStore {
    MokaStore::new(Some(MAX_SESSIONS))
}

/// Create the session layer over [`create_session_store`].
#[must_use]
pub fn create_session_layer(config: &StorefrontConfig) -> SessionManagerLayer<MokaStore> {
    SessionManagerLayer::new(create_session_store())
        .with_name(SESSION_COOKIE_NAME)
        .with_expiry(Expiry::OnInactivity(
            tower_sessions::cookie::time::Duration::seconds(SESSION_EXPIRY_SECONDS),
        ))
        .with_secure(config.secure_cookies())
        .with_same_site(tower_sessions::cookie::SameSite::Lax)
        .with_http_only(true)
        .with_path("/")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use tower_sessions::SessionStore;
    use tower_sessions::cookie::time::{Duration, OffsetDateTime};
    use tower_sessions::session::{Id, Record};

    use super::*;

    fn record(expires_in: Duration) -> Record {
        Record {
            id: Id::default(),
            data: Default::default(),
            expiry_date: OffsetDateTime::now_utc() + expires_in,
        }
    }

    #[tokio::test]
    async fn test_expired_sessions_are_not_retained() {
        let store = create_session_store();

        for _ in 0..100 {
            let mut expired = record(Duration::minutes(-5));
            store.create(&mut expired).await.unwrap();
            assert!(store.load(&expired.id).await.unwrap().is_none());
        }

        let mut live = record(Duration::hours(1));
        store.create(&mut live).await.unwrap();
        assert!(store.load(&live.id).await.unwrap().is_some());

        let retained = format!("{store:?}").matches("expiry_date").count();
        assert_eq!(retained, 1);
    }

    #[tokio::test]
    async fn test_deleted_session_is_gone() {
        let store = create_session_store();
        let mut session = record(Duration::hours(1));
        store.create(&mut session).await.unwrap();

        store.delete(&session.id).await.unwrap();
        assert!(store.load(&session.id).await.unwrap().is_none());
    }
}
