use crate::core::models::{NameSet, UserPermModel};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Per-user permission model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "user_perm_models")]
pub struct Model {
    /// Row ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning system; unique together with `uid`
    pub system: String,

    pub uid: String,

    /// Held role names
    pub roles: NameSet,

    /// Always-denied permission names
    pub blacklist: NameSet,

    /// Always-granted permission names
    pub whitelist: NameSet,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain user model
    pub fn to_domain(&self) -> UserPermModel {
        UserPermModel {
            system: self.system.clone(),
            uid: self.uid.clone(),
            roles: self.roles.clone(),
            blacklist: self.blacklist.clone(),
            whitelist: self.whitelist.clone(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }

    /// Active model for a new row
    pub fn from_domain(user: &UserPermModel) -> ActiveModel {
        ActiveModel {
            id: Set(Uuid::new_v4()),
            system: Set(user.system.clone()),
            uid: Set(user.uid.clone()),
            roles: Set(user.roles.clone()),
            blacklist: Set(user.blacklist.clone()),
            whitelist: Set(user.whitelist.clone()),
            created_at: Set(user.created_at.into()),
            updated_at: Set(user.updated_at.into()),
        }
    }
}
