//! Durable store lookups needed for permission resolution

use crate::core::models::{NameSet, UserPermModel};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Read side of the durable store consumed by the resolver
#[async_trait]
pub trait PermissionSource: Send + Sync {
    /// Load a user's model; fails with `NotFound` when absent
    async fn get_user(&self, system: &str, uid: &str) -> Result<UserPermModel>;

    /// Load the permission names of a role; fails with `NotFound` when absent
    async fn get_role_permissions(&self, system: &str, role: &str) -> Result<NameSet>;
}
