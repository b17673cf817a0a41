//! RBAC facade - construction, permit checks and lifecycle

use super::validation::require;
use crate::config::Config;
use crate::core::models::NameSet;
use crate::core::permission_cache::{CacheStats, PermissionCacheManager, PermissionCacheOptions};
use crate::core::traits::PermissionCache;
use crate::storage::database::Database;
use crate::storage::{StorageHealthStatus, StorageLayer};
use crate::utils::error::Result;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{debug, info};

/// Entry point of the RBAC service
///
/// Writes go to the durable store first; the matching cache invalidation runs
/// only once the write has succeeded.
pub struct Rbac {
    pub(super) store: Arc<Database>,
    pub(super) permissions: PermissionCacheManager,
    storage: StorageLayer,
}

impl Rbac {
    /// Create a facade over an injected store and cache
    pub fn new(
        store: Arc<Database>,
        cache: Arc<dyn PermissionCache>,
        options: PermissionCacheOptions,
    ) -> Self {
        let permissions = PermissionCacheManager::new(cache.clone(), store.clone(), options);
        Self {
            storage: StorageLayer::from_parts(store.clone(), cache),
            store,
            permissions,
        }
    }

    /// Connect both stores from configuration and run migrations
    pub async fn connect(config: &Config) -> Result<Self> {
        let storage = StorageLayer::new(config).await?;
        let rbac = Self::new(
            storage.database.clone(),
            storage.cache.clone(),
            PermissionCacheOptions::from(config.cache()),
        );

        info!(
            database = ?rbac.store.backend_type(),
            cache = rbac.storage.cache.backend_name(),
            "RBAC service ready"
        );
        Ok(rbac)
    }

    /// Whether `uid` holds `permission` in `system`; unknown users are denied
    pub async fn is_permitted(&self, system: &str, uid: &str, permission: &str) -> Result<bool> {
        require("system", system)?;
        require("uid", uid)?;
        require("permission", permission)?;

        let permit = self.permissions.is_permitted(system, uid, permission).await?;
        debug!(system, uid, permission, permit, "Permit check");
        Ok(permit)
    }

    /// Re-resolve a user's effective permissions into the cache
    pub async fn reload(&self, system: &str, uid: &str) -> Result<NameSet> {
        require("system", system)?;
        require("uid", uid)?;

        self.permissions.reload(system, uid).await
    }

    /// Cached effective permissions of a user, `None` until resolved
    pub async fn cached_permissions(
        &self,
        system: &str,
        uid: &str,
    ) -> Result<Option<BTreeSet<String>>> {
        require("system", system)?;
        require("uid", uid)?;

        self.permissions.cached_permissions(system, uid).await
    }

    pub fn cache_stats(&self) -> CacheStats {
        self.permissions.stats()
    }

    pub fn store(&self) -> &Arc<Database> {
        &self.store
    }

    pub fn cache_manager(&self) -> &PermissionCacheManager {
        &self.permissions
    }

    pub async fn health_check(&self) -> StorageHealthStatus {
        self.storage.health_check().await
    }

    /// Close both store connections
    pub async fn close(&self) -> Result<()> {
        self.storage.close().await
    }

    /// Drop the cached entry of a user once a write to it succeeded
    pub(super) async fn user_changed(&self, system: &str, uid: &str) -> Result<()> {
        self.permissions.invalidate_user(system, uid).await?;
        Ok(())
    }

    /// Drop every cached entry once a role write succeeded
    pub(super) async fn role_changed(&self) -> Result<()> {
        self.permissions.invalidate_all().await
    }
}

impl std::fmt::Debug for Rbac {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Rbac")
            .field("storage", &self.storage)
            .field("permissions", &self.permissions)
            .finish()
    }
}
