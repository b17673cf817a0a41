//! Redis-backed permission cache

use crate::core::permission_cache::PermissionKeys;
use crate::core::traits::PermissionCache;
use crate::storage::redis::RedisPool;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::info;

/// Permission cache stored as one Redis set per key
#[derive(Debug, Clone)]
pub struct RedisPermissionCache {
    pool: Arc<RedisPool>,
    keys: PermissionKeys,
}

impl RedisPermissionCache {
    pub fn new(pool: Arc<RedisPool>, namespace: &str) -> Self {
        Self {
            pool,
            keys: PermissionKeys::new(namespace),
        }
    }

    pub fn pool(&self) -> &Arc<RedisPool> {
        &self.pool
    }
}

#[async_trait]
impl PermissionCache for RedisPermissionCache {
    async fn exists(&self, key: &str) -> Result<bool> {
        self.pool.exists(key).await
    }

    async fn is_member(&self, key: &str, member: &str) -> Result<bool> {
        self.pool.set_is_member(key, member).await
    }

    async fn add_members(&self, key: &str, members: &[String]) -> Result<()> {
        self.pool.set_add(key, members).await
    }

    async fn remove_members(&self, key: &str, members: &[String]) -> Result<()> {
        self.pool.set_remove(key, members).await
    }

    async fn list_members(&self, key: &str) -> Result<BTreeSet<String>> {
        self.pool.set_members(key).await
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        self.pool.delete(key).await
    }

    /// Unlinks only this namespace's keys; other data in the database survives
    async fn flush_all(&self) -> Result<()> {
        let removed = self
            .pool
            .delete_matching(&self.keys.namespace_pattern())
            .await?;
        info!(
            namespace = self.keys.namespace(),
            removed, "Flushed Redis permission cache"
        );
        Ok(())
    }

    async fn health_check(&self) -> Result<()> {
        self.pool.health_check().await
    }

    async fn close(&self) -> Result<()> {
        self.pool.close().await
    }

    fn backend_name(&self) -> &'static str {
        "redis"
    }
}
