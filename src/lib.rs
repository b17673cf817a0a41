//! # rbac-rs
//!
//! Role-based access control with a cached permit check.
//!
//! Permissions, roles and per-user role assignments live in a durable store
//! (SQLite or PostgreSQL through SeaORM). A user's effective permission set is
//! `(whitelist ∪ role permissions) \ blacklist`; it is resolved on the first
//! check, kept in a set-valued cache (Redis or in-process) and dropped whenever
//! a write could change it.
//!
//! ## Features
//!
//! - **Lazy resolution**: cache entries are filled on a miss, never on write
//! - **Targeted invalidation**: user writes drop one entry, role writes flush the namespace
//! - **Pluggable cache**: Redis with sentinel discovery and retries, or an in-memory map
//! - **REST API**: actix-web endpoints with the `{code, message, ...}` envelope
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use rbac_rs::{Config, Rbac};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::from_file("config/rbac.yaml").await?;
//!     let rbac = Rbac::connect(&config).await?;
//!
//!     rbac.register_role("Cowshed", "common", "", &["read", "write"]).await?;
//!     rbac.register_user("Cowshed", "uid_common", &["common"]).await?;
//!
//!     assert!(rbac.is_permitted("Cowshed", "uid_common", "write").await?);
//!     assert!(!rbac.is_permitted("Cowshed", "uid_common", "manage").await?);
//!     Ok(())
//! }
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_inception)]

pub mod config;
pub mod core;
pub mod rbac;
pub mod server;
pub mod storage;
pub mod utils;

// Re-export main types
pub use config::Config;
pub use core::models::{NameSet, Permission, Role, UserPermModel};
pub use core::permission_cache::{PermissionCacheManager, PermissionCacheOptions};
pub use core::traits::{PermissionCache, PermissionSource};
pub use rbac::Rbac;
pub use storage::cache::{MemoryPermissionCache, RedisPermissionCache};
pub use utils::error::{RbacError, Result};

// Version information
/// Current version of the crate
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Name of the crate
pub const NAME: &str = env!("CARGO_PKG_NAME");
/// Description of the crate
pub const DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_constants() {
        assert_eq!(VERSION, env!("CARGO_PKG_VERSION"));
        assert_eq!(NAME, "rbac-rs");
        assert!(!DESCRIPTION.is_empty());
    }
}
