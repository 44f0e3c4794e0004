//! Caching decorator for profile lookup.
//!
//! Staleness policy: only found profiles are cached, for the configured
//! TTL. A missing row is re-queried every time, so a freshly-created
//! profile is visible immediately. Errors are never cached.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use moka::future::Cache;
use uuid::Uuid;

use recruitflow_core::config::cache::CacheConfig;
use recruitflow_core::result::AppResult;
use recruitflow_entity::profile::Profile;

use super::lookup::ProfileLookup;

/// Wraps any [`ProfileLookup`] with an in-memory TTL cache.
#[derive(Clone)]
pub struct CachedProfileLookup {
    inner: Arc<dyn ProfileLookup>,
    cache: Cache<Uuid, Profile>,
}

impl std::fmt::Debug for CachedProfileLookup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CachedProfileLookup")
            .field("entry_count", &self.cache.entry_count())
            .finish()
    }
}

impl CachedProfileLookup {
    /// Create a caching decorator from configuration.
    pub fn new(inner: Arc<dyn ProfileLookup>, config: &CacheConfig) -> Self {
        let cache = Cache::builder()
            .max_capacity(config.max_capacity)
            .time_to_live(Duration::from_secs(config.time_to_live_seconds))
            .build();

        Self { inner, cache }
    }

    /// Drop a cached profile, forcing the next lookup to hit the store.
    pub async fn invalidate(&self, user_id: Uuid) {
        self.cache.invalidate(&user_id).await;
    }
}

#[async_trait]
impl ProfileLookup for CachedProfileLookup {
    async fn find_profile(&self, user_id: Uuid) -> AppResult<Option<Profile>> {
        if let Some(profile) = self.cache.get(&user_id).await {
            return Ok(Some(profile));
        }

        match self.inner.find_profile(user_id).await? {
            Some(profile) => {
                self.cache.insert(user_id, profile.clone()).await;
                Ok(Some(profile))
            }
            None => Ok(None),
        }
    }
}
