//! User Service
//!
//! Fetches users through the TTL cache and summarizes them by department.

use tracing::{debug, info};

use crate::aggregate::aggregate;
use crate::cache::TtlCache;
use crate::client::UserSource;
use crate::error::Result;
use crate::models::{GroupedData, User};

/// Cache key under which the fetched users are stored
pub const USERS_CACHE_KEY: &str = "users";

// == User Service ==
/// Owns a user source and the cache in front of it.
///
/// Construct once and keep it for as long as cached users should be reused.
pub struct UserService<S> {
    source: S,
    cache: TtlCache<Vec<User>>,
}

impl<S: UserSource> UserService<S> {
    pub fn new(source: S, cache: TtlCache<Vec<User>>) -> Self {
        Self { source, cache }
    }

    // == Get Users ==
    /// Returns the cached users if still fresh, otherwise fetches and caches them.
    ///
    /// A failed fetch leaves the cache untouched and propagates the error.
    pub async fn get_users(&mut self) -> Result<Vec<User>> {
        let ttl = self.cache.ttl();
        if let Some(users) = self.cache.get(USERS_CACHE_KEY) {
            debug!("Serving {} users from cache (ttl {:?})", users.len(), ttl);
            return Ok(users.clone());
        }

        let users = self.source.fetch_users().await?;
        self.cache.set(USERS_CACHE_KEY, users.clone());
        Ok(users)
    }

    // == Summarize ==
    /// Fetches users (through the cache) and aggregates them by department.
    pub async fn summarize(&mut self) -> Result<GroupedData> {
        let users = self.get_users().await?;
        let grouped = aggregate(&users);
        info!(
            "Summarized {} users into {} departments",
            users.len(),
            grouped.len()
        );
        Ok(grouped)
    }

    pub fn cache(&self) -> &TtlCache<Vec<User>> {
        &self.cache
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::DigestError;
    use crate::models::user::sample_user;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::time::Duration;

    /// Serves a fixed user list and counts calls
    struct FakeSource {
        users: Vec<User>,
        fail: bool,
        calls: Arc<AtomicUsize>,
    }

    #[async_trait]
    impl UserSource for FakeSource {
        async fn fetch_users(&self) -> Result<Vec<User>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err(DigestError::FetchFailure("connection refused".to_string()));
            }
            Ok(self.users.clone())
        }
    }

    fn build_service(fail: bool, ttl: Duration) -> (UserService<FakeSource>, Arc<AtomicUsize>) {
        let calls = Arc::new(AtomicUsize::new(0));
        let source = FakeSource {
            users: vec![
                sample_user("Engineering", "male", 30, "brown", "John", "Doe", "12345"),
                sample_user("Sales", "female", 41, "black", "Amy", "Lane", "54321"),
            ],
            fail,
            calls: calls.clone(),
        };
        (UserService::new(source, TtlCache::new(ttl)), calls)
    }

    #[tokio::test]
    async fn test_get_users_fetches_once_within_ttl() {
        let (mut service, calls) = build_service(false, Duration::from_secs(300));

        let first = service.get_users().await.unwrap();
        let second = service.get_users().await.unwrap();

        assert_eq!(first, second);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(service.cache().stats().hits, 1);
    }

    #[tokio::test]
    async fn test_get_users_refetches_after_ttl() {
        let (mut service, calls) = build_service(false, Duration::from_millis(30));

        service.get_users().await.unwrap();
        tokio::time::sleep(Duration::from_millis(60)).await;
        service.get_users().await.unwrap();

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert_eq!(service.cache().stats().expirations, 1);
    }

    #[tokio::test]
    async fn test_failed_fetch_is_not_cached() {
        let (mut service, calls) = build_service(true, Duration::from_secs(300));

        assert!(matches!(
            service.get_users().await,
            Err(DigestError::FetchFailure(_))
        ));
        assert!(service.get_users().await.is_err());

        assert_eq!(calls.load(Ordering::SeqCst), 2);
        assert!(service.cache().is_empty());
    }

    #[tokio::test]
    async fn test_summarize() {
        let (mut service, _) = build_service(false, Duration::from_secs(300));

        let grouped = service.summarize().await.unwrap();

        assert_eq!(grouped.len(), 2);
        assert_eq!(grouped["Engineering"].age_range, "30-30");
        assert_eq!(grouped["Sales"].female, 1);
    }
}
