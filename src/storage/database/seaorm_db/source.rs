//! Durable store lookups for permission resolution

use crate::core::models::{NameSet, UserPermModel};
use crate::core::traits::PermissionSource;
use crate::utils::error::Result;
use async_trait::async_trait;

use super::types::SeaOrmDatabase;

#[async_trait]
impl PermissionSource for SeaOrmDatabase {
    async fn get_user(&self, system: &str, uid: &str) -> Result<UserPermModel> {
        self.find_user(system, uid).await
    }

    async fn get_role_permissions(&self, system: &str, role: &str) -> Result<NameSet> {
        self.role_permissions(system, role).await
    }
}
