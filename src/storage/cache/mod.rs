//! Permission cache backends
//!
//! - `memory` - single-process map, used in tests and single-node deployments
//! - `redis` - shared Redis sets, used in production

mod memory;
mod redis;

pub use crate::core::traits::PermissionCache;
pub use memory::MemoryPermissionCache;
pub use self::redis::RedisPermissionCache;

use crate::config::{CacheBackend, CacheConfig, RedisConfig};
use crate::storage::redis::RedisPool;
use crate::utils::error::Result;
use std::sync::Arc;
use tracing::info;

/// Build the configured cache backend, connecting to Redis when needed
pub async fn connect_cache(
    cache: &CacheConfig,
    redis: &RedisConfig,
) -> Result<Arc<dyn PermissionCache>> {
    match cache.backend {
        CacheBackend::Memory => {
            info!("Using in-memory permission cache");
            Ok(Arc::new(MemoryPermissionCache::new(&cache.namespace)))
        }
        CacheBackend::Redis => {
            let pool = Arc::new(RedisPool::new(redis).await?);
            Ok(Arc::new(RedisPermissionCache::new(pool, &cache.namespace)))
        }
    }
}
