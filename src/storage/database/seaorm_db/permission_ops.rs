use crate::core::models::Permission;
use crate::utils::error::{RbacError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, permission};
use super::types::SeaOrmDatabase;
use super::unique_violation;

impl SeaOrmDatabase {
    async fn find_permission_model<C: ConnectionTrait>(
        conn: &C,
        system: &str,
        name: &str,
    ) -> Result<Option<permission::Model>> {
        Ok(entities::Permission::find()
            .filter(permission::Column::System.eq(system))
            .filter(permission::Column::Name.eq(name))
            .one(conn)
            .await?)
    }

    /// Find permission by system and name
    pub async fn find_permission(&self, system: &str, name: &str) -> Result<Option<Permission>> {
        debug!("Finding permission {}/{}", system, name);
        Ok(Self::find_permission_model(&self.db, system, name)
            .await?
            .map(|model| model.to_domain()))
    }

    /// Create a permission, or replace the description of an existing one
    pub async fn upsert_permission(
        &self,
        system: &str,
        name: &str,
        description: &str,
    ) -> Result<Permission> {
        debug!("Upserting permission {}/{}", system, name);

        let model = match Self::find_permission_model(&self.db, system, name).await? {
            Some(existing) => {
                let mut active: permission::ActiveModel = existing.into();
                active.description = Set(description.to_string());
                active.updated_at = Set(chrono::Utc::now().into());
                active.update(&self.db).await?
            }
            None => permission::Model::new_active(system, name, description)
                .insert(&self.db)
                .await
                .map_err(|e| unique_violation(e, format!("permission {}/{}", system, name)))?,
        };

        Ok(model.to_domain())
    }

    /// Delete a permission; roles naming it are left untouched
    pub async fn delete_permission(&self, system: &str, name: &str) -> Result<()> {
        debug!("Deleting permission {}/{}", system, name);

        let result = entities::Permission::delete_many()
            .filter(permission::Column::System.eq(system))
            .filter(permission::Column::Name.eq(name))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(RbacError::not_found(format!(
                "permission {}/{}",
                system, name
            )));
        }
        Ok(())
    }

    /// All permissions of a system, ordered by name
    pub async fn list_permissions(&self, system: &str) -> Result<Vec<Permission>> {
        let models = entities::Permission::find()
            .filter(permission::Column::System.eq(system))
            .order_by_asc(permission::Column::Name)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(permission::Model::to_domain).collect())
    }

    /// Rename a permission in place
    pub async fn rename_permission(&self, system: &str, old: &str, new: &str) -> Result<()> {
        debug!("Renaming permission {}/{} to {}", system, old, new);

        let txn = self.db.begin().await?;

        let existing = Self::find_permission_model(&txn, system, old)
            .await?
            .ok_or_else(|| RbacError::not_found(format!("permission {}/{}", system, old)))?;

        if old != new && Self::find_permission_model(&txn, system, new).await?.is_some() {
            return Err(RbacError::conflict(format!(
                "permission {}/{} already exists",
                system, new
            )));
        }

        let mut active: permission::ActiveModel = existing.into();
        active.name = Set(new.to_string());
        active.updated_at = Set(chrono::Utc::now().into());
        active
            .update(&txn)
            .await
            .map_err(|e| unique_violation(e, format!("permission {}/{}", system, new)))?;

        txn.commit().await?;
        Ok(())
    }
}
