//! Permission cache manager
//!
//! This module provides the cached permit check and the invalidation entry points
//! used after writes to the durable store.

mod key;
mod manager;
mod single_flight;
mod types;

pub use key::PermissionKeys;
pub use manager::PermissionCacheManager;
pub use single_flight::SingleFlight;
pub use types::{AtomicCacheStats, CacheStats, PermissionCacheOptions};
