use crate::core::models::{NameSet, Role};
use crate::utils::error::{RbacError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, role};
use super::types::SeaOrmDatabase;
use super::unique_violation;

fn role_not_found(system: &str, name: &str) -> RbacError {
    RbacError::not_found(format!("role {}/{}", system, name))
}

impl SeaOrmDatabase {
    async fn find_role_model<C: ConnectionTrait>(
        conn: &C,
        system: &str,
        name: &str,
    ) -> Result<Option<role::Model>> {
        Ok(entities::Role::find()
            .filter(role::Column::System.eq(system))
            .filter(role::Column::Name.eq(name))
            .one(conn)
            .await?)
    }

    /// Find role by system and name; `NotFound` when absent
    pub async fn find_role(&self, system: &str, name: &str) -> Result<Role> {
        debug!("Finding role {}/{}", system, name);
        Self::find_role_model(&self.db, system, name)
            .await?
            .map(|model| model.to_domain())
            .ok_or_else(|| role_not_found(system, name))
    }

    /// Create a role, or replace description and permissions of an existing one
    pub async fn upsert_role(
        &self,
        system: &str,
        name: &str,
        description: &str,
        permissions: NameSet,
    ) -> Result<Role> {
        debug!("Upserting role {}/{}", system, name);

        let model = match Self::find_role_model(&self.db, system, name).await? {
            Some(existing) => {
                let mut active: role::ActiveModel = existing.into();
                active.description = Set(description.to_string());
                active.permissions = Set(permissions);
                active.updated_at = Set(chrono::Utc::now().into());
                active.update(&self.db).await?
            }
            None => role::Model::new_active(system, name, description, permissions)
                .insert(&self.db)
                .await
                .map_err(|e| unique_violation(e, format!("role {}/{}", system, name)))?,
        };

        Ok(model.to_domain())
    }

    /// Delete a role; users holding it keep the name
    pub async fn delete_role(&self, system: &str, name: &str) -> Result<()> {
        debug!("Deleting role {}/{}", system, name);

        let result = entities::Role::delete_many()
            .filter(role::Column::System.eq(system))
            .filter(role::Column::Name.eq(name))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(role_not_found(system, name));
        }
        Ok(())
    }

    /// Delete every role of a system, returning how many were removed
    pub async fn delete_roles_of_system(&self, system: &str) -> Result<u64> {
        debug!("Deleting all roles of {}", system);

        let result = entities::Role::delete_many()
            .filter(role::Column::System.eq(system))
            .exec(&self.db)
            .await?;
        Ok(result.rows_affected)
    }

    /// All roles of a system, ordered by name
    pub async fn list_roles(&self, system: &str) -> Result<Vec<Role>> {
        let models = entities::Role::find()
            .filter(role::Column::System.eq(system))
            .order_by_asc(role::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(role::Model::to_domain).collect())
    }

    /// Rename a role in place; users keep referring to the old name
    pub async fn rename_role(&self, system: &str, old: &str, new: &str) -> Result<()> {
        debug!("Renaming role {}/{} to {}", system, old, new);

        let txn = self.db.begin().await?;

        let existing = Self::find_role_model(&txn, system, old)
            .await?
            .ok_or_else(|| role_not_found(system, old))?;

        if old != new && Self::find_role_model(&txn, system, new).await?.is_some() {
            return Err(RbacError::conflict(format!(
                "role {}/{} already exists",
                system, new
            )));
        }

        let mut active: role::ActiveModel = existing.into();
        active.name = Set(new.to_string());
        active.updated_at = Set(chrono::Utc::now().into());
        active
            .update(&txn)
            .await
            .map_err(|e| unique_violation(e, format!("role {}/{}", system, new)))?;

        txn.commit().await?;
        Ok(())
    }

    /// Permission names of a role; `NotFound` when absent
    pub async fn role_permissions(&self, system: &str, name: &str) -> Result<NameSet> {
        Self::find_role_model(&self.db, system, name)
            .await?
            .map(|model| model.permissions)
            .ok_or_else(|| role_not_found(system, name))
    }

    /// Apply `change` to a role's permission set inside a transaction
    pub async fn modify_role_permissions<F>(&self, system: &str, name: &str, change: F) -> Result<Role>
    where
        F: FnOnce(&mut NameSet) + Send,
    {
        let txn = self.db.begin().await?;

        let existing = Self::find_role_model(&txn, system, name)
            .await?
            .ok_or_else(|| role_not_found(system, name))?;

        let mut permissions = existing.permissions.clone();
        change(&mut permissions);

        let mut active: role::ActiveModel = existing.into();
        active.permissions = Set(permissions);
        active.updated_at = Set(chrono::Utc::now().into());
        let model = active.update(&txn).await?;

        txn.commit().await?;
        Ok(model.to_domain())
    }
}
