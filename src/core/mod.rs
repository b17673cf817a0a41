//! Permission core
//!
//! Domain records, effective-permission resolution and the permission cache
//! manager, plus the traits through which they reach the backing stores.

pub mod models;
pub mod permission_cache;
pub mod resolver;
pub mod traits;
