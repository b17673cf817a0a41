//! Permission cache trait definition
//!
//! A set-valued key/value store holding one resolved permission set per key.

use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::BTreeSet;

/// Set store backing the permission cache
///
/// Entries never expire on their own. An entry lives until `delete` removes it or
/// `flush_all` drops the whole namespace. Every operation is a single atomic
/// primitive on the underlying store.
#[async_trait]
pub trait PermissionCache: Send + Sync {
    /// Whether an entry exists for `key`
    async fn exists(&self, key: &str) -> Result<bool>;

    /// Whether `member` belongs to the set at `key`; false when the key is absent
    async fn is_member(&self, key: &str, member: &str) -> Result<bool>;

    /// Add members to the set at `key`, creating it if needed
    async fn add_members(&self, key: &str, members: &[String]) -> Result<()>;

    /// Remove members from the set at `key`
    async fn remove_members(&self, key: &str, members: &[String]) -> Result<()>;

    /// All members of the set at `key`; empty when the key is absent
    async fn list_members(&self, key: &str) -> Result<BTreeSet<String>>;

    /// Delete the entry, returning whether it existed
    async fn delete(&self, key: &str) -> Result<bool>;

    /// Drop every entry this cache owns
    async fn flush_all(&self) -> Result<()>;

    /// Verify the backing store is reachable
    async fn health_check(&self) -> Result<()> {
        Ok(())
    }

    /// Release connections held by the backend
    async fn close(&self) -> Result<()> {
        Ok(())
    }

    /// Name of the backend, for logs and health output
    fn backend_name(&self) -> &'static str;
}
