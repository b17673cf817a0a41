//! Permission operations
//!
//! Permissions are catalogue entries only. Roles reference them by name and are
//! not rewritten when a permission changes, so no cache entry goes stale here.

use super::manager::Rbac;
use super::validation::require;
use crate::core::models::Permission;
use crate::utils::error::Result;
use tracing::info;

impl Rbac {
    /// Register a permission, replacing the description if it exists
    pub async fn register_permission(
        &self,
        system: &str,
        name: &str,
        description: &str,
    ) -> Result<Permission> {
        require("system", system)?;
        require("name", name)?;

        let permission = self
            .store
            .upsert_permission(system, name, description)
            .await?;
        info!("Registered permission {}/{}", system, name);
        Ok(permission)
    }

    /// Remove a permission; `NotFound` when absent
    pub async fn unregister_permission(&self, system: &str, name: &str) -> Result<()> {
        require("system", system)?;
        require("name", name)?;

        self.store.delete_permission(system, name).await?;
        info!("Unregistered permission {}/{}", system, name);
        Ok(())
    }

    /// All permissions of a system, ordered by name
    pub async fn permissions_of_system(&self, system: &str) -> Result<Vec<Permission>> {
        require("system", system)?;
        self.store.list_permissions(system).await
    }

    /// Rename a permission in place
    pub async fn update_permission(&self, system: &str, old_name: &str, new_name: &str) -> Result<()> {
        require("system", system)?;
        require("oldname", old_name)?;
        require("newname", new_name)?;

        self.store
            .rename_permission(system, old_name, new_name)
            .await?;
        info!(
            "Renamed permission {}/{} to {}",
            system, old_name, new_name
        );
        Ok(())
    }
}
