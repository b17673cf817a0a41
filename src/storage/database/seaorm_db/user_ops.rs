use crate::core::models::UserPermModel;
use crate::utils::error::{RbacError, Result};
use sea_orm::*;
use tracing::debug;

use super::super::entities::{self, user_perm_model};
use super::types::SeaOrmDatabase;
use super::unique_violation;

fn user_not_found(system: &str, uid: &str) -> RbacError {
    RbacError::not_found(format!("user {}/{}", system, uid))
}

impl SeaOrmDatabase {
    async fn find_user_model<C: ConnectionTrait>(
        conn: &C,
        system: &str,
        uid: &str,
    ) -> Result<Option<user_perm_model::Model>> {
        Ok(entities::UserPermModel::find()
            .filter(user_perm_model::Column::System.eq(system))
            .filter(user_perm_model::Column::Uid.eq(uid))
            .one(conn)
            .await?)
    }

    /// Find user model by system and uid; `NotFound` when absent
    pub async fn find_user(&self, system: &str, uid: &str) -> Result<UserPermModel> {
        debug!("Finding user {}/{}", system, uid);
        Self::find_user_model(&self.db, system, uid)
            .await?
            .map(|model| model.to_domain())
            .ok_or_else(|| user_not_found(system, uid))
    }

    /// Store `user`, replacing roles and both lists of an existing record
    pub async fn upsert_user(&self, user: &UserPermModel) -> Result<UserPermModel> {
        debug!("Upserting user {}/{}", user.system, user.uid);

        let model = match Self::find_user_model(&self.db, &user.system, &user.uid).await? {
            Some(existing) => Self::replace_user_model(&self.db, existing, user).await?,
            None => user_perm_model::Model::from_domain(user)
                .insert(&self.db)
                .await
                .map_err(|e| unique_violation(e, format!("user {}/{}", user.system, user.uid)))?,
        };

        Ok(model.to_domain())
    }

    /// Replace roles and both lists of an existing user; `NotFound` when absent
    pub async fn replace_user(&self, user: &UserPermModel) -> Result<UserPermModel> {
        debug!("Replacing user {}/{}", user.system, user.uid);

        let existing = Self::find_user_model(&self.db, &user.system, &user.uid)
            .await?
            .ok_or_else(|| user_not_found(&user.system, &user.uid))?;

        Ok(Self::replace_user_model(&self.db, existing, user)
            .await?
            .to_domain())
    }

    async fn replace_user_model<C: ConnectionTrait>(
        conn: &C,
        existing: user_perm_model::Model,
        user: &UserPermModel,
    ) -> Result<user_perm_model::Model> {
        let mut active: user_perm_model::ActiveModel = existing.into();
        active.roles = Set(user.roles.clone());
        active.blacklist = Set(user.blacklist.clone());
        active.whitelist = Set(user.whitelist.clone());
        active.updated_at = Set(chrono::Utc::now().into());
        Ok(active.update(conn).await?)
    }

    /// Delete a user model
    pub async fn delete_user(&self, system: &str, uid: &str) -> Result<()> {
        debug!("Deleting user {}/{}", system, uid);

        let result = entities::UserPermModel::delete_many()
            .filter(user_perm_model::Column::System.eq(system))
            .filter(user_perm_model::Column::Uid.eq(uid))
            .exec(&self.db)
            .await?;

        if result.rows_affected == 0 {
            return Err(user_not_found(system, uid));
        }
        Ok(())
    }

    /// All users of a system, ordered by uid
    pub async fn list_users(&self, system: &str) -> Result<Vec<UserPermModel>> {
        let models = entities::UserPermModel::find()
            .filter(user_perm_model::Column::System.eq(system))
            .order_by_asc(user_perm_model::Column::Uid)
            .all(&self.db)
            .await?;

        Ok(models.iter().map(user_perm_model::Model::to_domain).collect())
    }

    /// Apply `change` to a user's model inside a transaction
    ///
    /// Only roles and the two lists are written back.
    pub async fn modify_user<F>(&self, system: &str, uid: &str, change: F) -> Result<UserPermModel>
    where
        F: FnOnce(&mut UserPermModel) + Send,
    {
        let txn = self.db.begin().await?;

        let existing = Self::find_user_model(&txn, system, uid)
            .await?
            .ok_or_else(|| user_not_found(system, uid))?;

        let mut user = existing.to_domain();
        change(&mut user);

        let model = Self::replace_user_model(&txn, existing, &user).await?;

        txn.commit().await?;
        Ok(model.to_domain())
    }
}
