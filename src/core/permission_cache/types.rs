//! Permission cache options and statistics

use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Options for the cache manager
#[derive(Debug, Clone)]
pub struct PermissionCacheOptions {
    /// Key namespace
    pub namespace: String,
    /// Coalesce concurrent misses on the same key
    pub single_flight: bool,
}

impl Default for PermissionCacheOptions {
    fn default() -> Self {
        Self {
            namespace: "rbac".to_string(),
            single_flight: false,
        }
    }
}

impl From<&crate::config::CacheConfig> for PermissionCacheOptions {
    fn from(config: &crate::config::CacheConfig) -> Self {
        Self {
            namespace: config.namespace.clone(),
            single_flight: config.single_flight,
        }
    }
}

/// Atomic counters updated on the permit-check path
#[derive(Debug, Default)]
pub struct AtomicCacheStats {
    /// Member found in the cached set
    pub hits: AtomicU64,
    /// Entry present but member absent
    pub denials: AtomicU64,
    /// Entry absent, resolved from the durable store
    pub misses: AtomicU64,
    /// Explicit reloads
    pub reloads: AtomicU64,
    /// Single-user invalidations
    pub invalidations: AtomicU64,
    /// Namespace flushes
    pub flushes: AtomicU64,
}

/// Cache statistics snapshot (returned to callers)
#[derive(Debug, Default, Clone, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub denials: u64,
    pub misses: u64,
    pub reloads: u64,
    pub invalidations: u64,
    pub flushes: u64,
}

impl CacheStats {
    /// Share of permit checks answered without touching the durable store
    pub fn hit_rate(&self) -> f64 {
        let answered = self.hits + self.denials;
        let total = answered + self.misses;

        if total == 0 {
            0.0
        } else {
            answered as f64 / total as f64
        }
    }
}

impl AtomicCacheStats {
    pub(super) fn incr(counter: &AtomicU64) {
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// Create a snapshot of current stats
    pub fn snapshot(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            denials: self.denials.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            reloads: self.reloads.load(Ordering::Relaxed),
            invalidations: self.invalidations.load(Ordering::Relaxed),
            flushes: self.flushes.load(Ordering::Relaxed),
        }
    }

    /// Reset all stats to zero
    pub fn reset(&self) {
        self.hits.store(0, Ordering::Relaxed);
        self.denials.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
        self.reloads.store(0, Ordering::Relaxed);
        self.invalidations.store(0, Ordering::Relaxed);
        self.flushes.store(0, Ordering::Relaxed);
    }
}
