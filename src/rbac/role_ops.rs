//! Role operations
//!
//! Any user may hold any role and the cache keeps no index from role to user,
//! so every role write that can change an effective set flushes the namespace.

use super::manager::Rbac;
use super::validation::{require, require_each};
use crate::core::models::{NameSet, Role};
use crate::utils::error::Result;
use tracing::info;

impl Rbac {
    /// Register a role, replacing description and permissions if it exists
    pub async fn register_role<S: AsRef<str>>(
        &self,
        system: &str,
        name: &str,
        description: &str,
        permissions: &[S],
    ) -> Result<Role> {
        require("system", system)?;
        require("name", name)?;
        require_each("permissions", permissions)?;

        let permissions: NameSet = permissions.iter().map(AsRef::as_ref).collect();
        let role = self
            .store
            .upsert_role(system, name, description, permissions)
            .await?;
        self.role_changed().await?;

        info!(
            "Registered role {}/{} with {} permissions",
            system,
            name,
            role.permissions.len()
        );
        Ok(role)
    }

    /// Remove a role; users holding it keep the dangling name
    pub async fn unregister_role(&self, system: &str, name: &str) -> Result<()> {
        require("system", system)?;
        require("name", name)?;

        self.store.delete_role(system, name).await?;
        self.role_changed().await?;
        info!("Unregistered role {}/{}", system, name);
        Ok(())
    }

    /// Remove every role of a system, returning how many were deleted
    pub async fn unregister_all_roles(&self, system: &str) -> Result<u64> {
        require("system", system)?;

        let removed = self.store.delete_roles_of_system(system).await?;
        if removed > 0 {
            self.role_changed().await?;
        }
        info!("Unregistered {} roles of {}", removed, system);
        Ok(removed)
    }

    pub async fn role(&self, system: &str, name: &str) -> Result<Role> {
        require("system", system)?;
        require("role", name)?;
        self.store.find_role(system, name).await
    }

    /// All roles of a system, ordered by name
    pub async fn roles_of_system(&self, system: &str) -> Result<Vec<Role>> {
        require("system", system)?;
        self.store.list_roles(system).await
    }

    /// Rename a role
    ///
    /// Users keep the old name, so they lose the role's grants until reassigned.
    pub async fn update_role_name(&self, system: &str, old_name: &str, new_name: &str) -> Result<()> {
        require("system", system)?;
        require("oldname", old_name)?;
        require("newname", new_name)?;

        self.store.rename_role(system, old_name, new_name).await?;
        self.role_changed().await?;
        info!("Renamed role {}/{} to {}", system, old_name, new_name);
        Ok(())
    }

    pub async fn permissions_of_role(&self, system: &str, name: &str) -> Result<NameSet> {
        require("system", system)?;
        require("role", name)?;
        self.store.role_permissions(system, name).await
    }

    /// Add permissions to a role; an empty list changes nothing
    pub async fn grant_permissions_to_role<S: AsRef<str>>(
        &self,
        system: &str,
        name: &str,
        permissions: &[S],
    ) -> Result<()> {
        require("system", system)?;
        require("role", name)?;
        require_each("permissions", permissions)?;

        if permissions.is_empty() {
            return Ok(());
        }

        let granted: Vec<String> = permissions
            .iter()
            .map(|permission| permission.as_ref().to_string())
            .collect();
        self.store
            .modify_role_permissions(system, name, move |set| {
                set.extend_from(granted);
            })
            .await?;
        self.role_changed().await?;

        info!("Granted {} permissions to role {}/{}", permissions.len(), system, name);
        Ok(())
    }

    /// Remove one permission from a role
    pub async fn remove_permission_from_role(
        &self,
        system: &str,
        name: &str,
        permission: &str,
    ) -> Result<()> {
        require("system", system)?;
        require("role", name)?;
        require("permission", permission)?;

        let revoked = permission.to_string();
        self.store
            .modify_role_permissions(system, name, move |set| {
                set.remove(&revoked);
            })
            .await?;
        self.role_changed().await?;

        info!("Removed permission {} from role {}/{}", permission, system, name);
        Ok(())
    }
}
