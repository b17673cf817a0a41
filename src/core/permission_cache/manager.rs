//! Permission cache manager
//!
//! Answers permit checks from the cache, falls back to the durable store on a
//! miss, and drops entries when a write may have changed them.

use super::key::PermissionKeys;
use super::single_flight::SingleFlight;
use super::types::{AtomicCacheStats, CacheStats, PermissionCacheOptions};
use crate::core::models::NameSet;
use crate::core::resolver;
use crate::core::traits::{PermissionCache, PermissionSource};
use crate::utils::error::Result;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Resolves and caches effective permission sets
///
/// Without single-flight, concurrent misses on a cold key each resolve from the
/// store and repopulate the entry. The result is the same set every time.
///
/// Fills take no lock against writers: a set resolved before a concurrent write
/// can be stored after that write's invalidation returned, and it stays until
/// the next invalidation of the key, since entries never expire.
pub struct PermissionCacheManager {
    cache: Arc<dyn PermissionCache>,
    source: Arc<dyn PermissionSource>,
    keys: PermissionKeys,
    single_flight: Option<SingleFlight>,
    stats: AtomicCacheStats,
}

impl PermissionCacheManager {
    /// Create a new cache manager over an injected cache and store
    pub fn new(
        cache: Arc<dyn PermissionCache>,
        source: Arc<dyn PermissionSource>,
        options: PermissionCacheOptions,
    ) -> Self {
        info!(
            backend = cache.backend_name(),
            namespace = %options.namespace,
            single_flight = options.single_flight,
            "Permission cache manager initialized"
        );

        Self {
            cache,
            source,
            keys: PermissionKeys::new(options.namespace),
            single_flight: options.single_flight.then(SingleFlight::new),
            stats: AtomicCacheStats::default(),
        }
    }

    pub fn keys(&self) -> &PermissionKeys {
        &self.keys
    }

    pub fn cache(&self) -> &Arc<dyn PermissionCache> {
        &self.cache
    }

    /// Whether `uid` holds `permission` in `system`
    ///
    /// Unknown users resolve to an empty set and answer `false`. Store failures
    /// during resolution are returned as errors, never as a denial.
    pub async fn is_permitted(&self, system: &str, uid: &str, permission: &str) -> Result<bool> {
        let key = self.keys.user_key(system, uid);

        if self.cache.is_member(&key, permission).await? {
            AtomicCacheStats::incr(&self.stats.hits);
            return Ok(true);
        }

        if self.cache.exists(&key).await? {
            AtomicCacheStats::incr(&self.stats.denials);
            return Ok(false);
        }

        AtomicCacheStats::incr(&self.stats.misses);
        debug!(system, uid, "Permission cache miss");

        match self.load_on_miss(system, uid, &key).await {
            // Answer from the resolved set; a flush racing the fill must not turn
            // into a spurious denial
            Ok(effective) => Ok(effective.contains(permission)),
            Err(e) if e.is_not_found() => {
                debug!(system, uid, "Unknown user resolves to no permissions");
                Ok(false)
            }
            Err(e) => Err(e),
        }
    }

    /// Drop the entry for `(system, uid)`, re-resolve it and store the result
    ///
    /// Unlike the permit check, a missing user propagates as `NotFound`.
    pub async fn reload(&self, system: &str, uid: &str) -> Result<NameSet> {
        let key = self.keys.user_key(system, uid);
        AtomicCacheStats::incr(&self.stats.reloads);

        self.cache.delete(&key).await?;
        self.resolve_and_store(system, uid, &key).await
    }

    /// Delete the cached entry of one user
    pub async fn invalidate_user(&self, system: &str, uid: &str) -> Result<bool> {
        let key = self.keys.user_key(system, uid);
        AtomicCacheStats::incr(&self.stats.invalidations);

        let existed = self.cache.delete(&key).await?;
        debug!(system, uid, existed, "Invalidated user permission cache");
        Ok(existed)
    }

    /// Drop every cached entry in the namespace
    ///
    /// Role changes reach an unknown set of users, so they flush everything.
    pub async fn invalidate_all(&self) -> Result<()> {
        AtomicCacheStats::incr(&self.stats.flushes);

        self.cache.flush_all().await?;
        info!(namespace = self.keys.namespace(), "Flushed permission cache");
        Ok(())
    }

    /// Current cache entry for `(system, uid)`, or `None` when unresolved
    pub async fn cached_permissions(
        &self,
        system: &str,
        uid: &str,
    ) -> Result<Option<BTreeSet<String>>> {
        let key = self.keys.user_key(system, uid);

        if !self.cache.exists(&key).await? {
            return Ok(None);
        }
        Ok(Some(self.cache.list_members(&key).await?))
    }

    pub fn stats(&self) -> CacheStats {
        self.stats.snapshot()
    }

    async fn load_on_miss(&self, system: &str, uid: &str, key: &str) -> Result<NameSet> {
        match &self.single_flight {
            None => self.resolve_and_store(system, uid, key).await,
            Some(flight) => {
                flight
                    .run(key, || self.fill_if_absent(system, uid, key))
                    .await
            }
        }
    }

    async fn fill_if_absent(&self, system: &str, uid: &str, key: &str) -> Result<NameSet> {
        // The previous lock holder may have filled the entry already
        if self.cache.exists(key).await? {
            return Ok(self.cache.list_members(key).await?.into());
        }
        self.resolve_and_store(system, uid, key).await
    }

    async fn resolve_and_store(&self, system: &str, uid: &str, key: &str) -> Result<NameSet> {
        let effective = resolver::resolve_user(self.source.as_ref(), system, uid).await?;

        // Replace rather than merge, so members from an older fill cannot linger
        self.cache.delete(key).await?;
        if !effective.is_empty() {
            let members: Vec<String> = effective.iter().cloned().collect();
            self.cache.add_members(key, &members).await?;
        }

        debug!(
            system,
            uid,
            permissions = effective.len(),
            "Stored resolved permissions"
        );
        Ok(effective)
    }
}

impl std::fmt::Debug for PermissionCacheManager {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PermissionCacheManager")
            .field("backend", &self.cache.backend_name())
            .field("keys", &self.keys)
            .field("single_flight", &self.single_flight.is_some())
            .finish()
    }
}
