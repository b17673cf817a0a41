//! User model operations
//!
//! Each successful write drops that one user's cache entry.

use super::manager::Rbac;
use super::validation::{require, require_each};
use crate::core::models::{NameSet, UserPermModel};
use crate::utils::error::Result;
use tracing::info;

fn owned<S: AsRef<str>>(names: &[S]) -> Vec<String> {
    names.iter().map(|name| name.as_ref().to_string()).collect()
}

impl Rbac {
    /// Register a user with the given roles and empty lists, replacing any
    /// existing model
    pub async fn register_user<S: AsRef<str>>(
        &self,
        system: &str,
        uid: &str,
        roles: &[S],
    ) -> Result<UserPermModel> {
        require("system", system)?;
        require("uid", uid)?;
        require_each("roles", roles)?;

        let user = UserPermModel::new(system, uid, roles.iter().map(AsRef::as_ref));
        let user = self.store.upsert_user(&user).await?;
        self.user_changed(system, uid).await?;

        info!("Registered user {}/{}", system, uid);
        Ok(user)
    }

    /// Remove a user model; `NotFound` when absent
    pub async fn unregister_user(&self, system: &str, uid: &str) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;

        self.store.delete_user(system, uid).await?;
        self.user_changed(system, uid).await?;
        info!("Unregistered user {}/{}", system, uid);
        Ok(())
    }

    /// Replace a user's model with `roles` and empty lists
    pub async fn update_user<S: AsRef<str>>(
        &self,
        system: &str,
        uid: &str,
        roles: &[S],
    ) -> Result<UserPermModel> {
        require("system", system)?;
        require("uid", uid)?;
        require_each("new_roles", roles)?;

        let user = UserPermModel::new(system, uid, roles.iter().map(AsRef::as_ref));
        let user = self.store.replace_user(&user).await?;
        self.user_changed(system, uid).await?;

        info!("Updated user {}/{}", system, uid);
        Ok(user)
    }

    pub async fn user(&self, system: &str, uid: &str) -> Result<UserPermModel> {
        require("system", system)?;
        require("uid", uid)?;
        self.store.find_user(system, uid).await
    }

    pub async fn roles_of_user(&self, system: &str, uid: &str) -> Result<NameSet> {
        Ok(self.user(system, uid).await?.roles)
    }

    /// Replace a user's roles; an empty list changes nothing
    pub async fn update_roles<S: AsRef<str>>(&self, system: &str, uid: &str, roles: &[S]) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;
        require_each("roles", roles)?;

        if roles.is_empty() {
            return Ok(());
        }

        let roles: NameSet = roles.iter().map(AsRef::as_ref).collect();
        self.store
            .modify_user(system, uid, move |user| user.roles = roles)
            .await?;
        self.user_changed(system, uid).await
    }

    /// Add roles to a user; an empty list changes nothing
    pub async fn add_roles<S: AsRef<str>>(&self, system: &str, uid: &str, roles: &[S]) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;
        require_each("roles", roles)?;

        if roles.is_empty() {
            return Ok(());
        }

        let added = owned(roles);
        self.store
            .modify_user(system, uid, move |user| {
                user.roles.extend_from(added);
            })
            .await?;
        self.user_changed(system, uid).await
    }

    pub async fn remove_role(&self, system: &str, uid: &str, role: &str) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;
        require("role", role)?;

        let role = role.to_string();
        self.store
            .modify_user(system, uid, move |user| {
                user.roles.remove(&role);
            })
            .await?;
        self.user_changed(system, uid).await
    }

    pub async fn blacklist(&self, system: &str, uid: &str) -> Result<NameSet> {
        Ok(self.user(system, uid).await?.blacklist)
    }

    /// Deny permissions to a user regardless of role grants
    pub async fn add_to_blacklist<S: AsRef<str>>(
        &self,
        system: &str,
        uid: &str,
        permissions: &[S],
    ) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;
        require_each("permissions", permissions)?;

        let denied = owned(permissions);
        self.store
            .modify_user(system, uid, move |user| {
                user.blacklist.extend_from(denied);
            })
            .await?;
        self.user_changed(system, uid).await
    }

    pub async fn remove_from_blacklist(&self, system: &str, uid: &str, permission: &str) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;
        require("permission", permission)?;

        let permission = permission.to_string();
        self.store
            .modify_user(system, uid, move |user| {
                user.blacklist.remove(&permission);
            })
            .await?;
        self.user_changed(system, uid).await
    }

    pub async fn clear_blacklist(&self, system: &str, uid: &str) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;

        self.store
            .modify_user(system, uid, |user| user.blacklist.clear())
            .await?;
        self.user_changed(system, uid).await
    }

    pub async fn whitelist(&self, system: &str, uid: &str) -> Result<NameSet> {
        Ok(self.user(system, uid).await?.whitelist)
    }

    /// Replace a user's whitelist
    pub async fn update_whitelist<S: AsRef<str>>(
        &self,
        system: &str,
        uid: &str,
        permissions: &[S],
    ) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;
        require_each("whitelist", permissions)?;

        let whitelist: NameSet = permissions.iter().map(AsRef::as_ref).collect();
        self.store
            .modify_user(system, uid, move |user| user.whitelist = whitelist)
            .await?;
        self.user_changed(system, uid).await
    }

    /// Grant permissions to a user regardless of role membership
    pub async fn add_to_whitelist<S: AsRef<str>>(
        &self,
        system: &str,
        uid: &str,
        permissions: &[S],
    ) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;
        require_each("permissions", permissions)?;

        let granted = owned(permissions);
        self.store
            .modify_user(system, uid, move |user| {
                user.whitelist.extend_from(granted);
            })
            .await?;
        self.user_changed(system, uid).await
    }

    pub async fn remove_from_whitelist(&self, system: &str, uid: &str, permission: &str) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;
        require("permission", permission)?;

        let permission = permission.to_string();
        self.store
            .modify_user(system, uid, move |user| {
                user.whitelist.remove(&permission);
            })
            .await?;
        self.user_changed(system, uid).await
    }

    pub async fn clear_whitelist(&self, system: &str, uid: &str) -> Result<()> {
        require("system", system)?;
        require("uid", uid)?;

        self.store
            .modify_user(system, uid, |user| user.whitelist.clear())
            .await?;
        self.user_changed(system, uid).await
    }
}
