use crate::core::models::{NameSet, Role};
use sea_orm::Set;
use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Role database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Eq, Serialize, Deserialize)]
#[sea_orm(table_name = "roles")]
pub struct Model {
    /// Row ID (UUID)
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: Uuid,

    /// Owning system; unique together with `name`
    pub system: String,

    pub name: String,

    pub description: String,

    /// Granted permission names, stored as a JSON array
    pub permissions: NameSet,

    /// Creation timestamp
    pub created_at: DateTimeWithTimeZone,

    /// Last update timestamp
    pub updated_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Convert SeaORM model to domain role
    pub fn to_domain(&self) -> Role {
        Role {
            system: self.system.clone(),
            name: self.name.clone(),
            description: self.description.clone(),
            permissions: self.permissions.clone(),
            created_at: self.created_at.with_timezone(&chrono::Utc),
            updated_at: self.updated_at.with_timezone(&chrono::Utc),
        }
    }

    /// Active model for a new row
    pub fn new_active(
        system: &str,
        name: &str,
        description: &str,
        permissions: NameSet,
    ) -> ActiveModel {
        let now = chrono::Utc::now();
        ActiveModel {
            id: Set(Uuid::new_v4()),
            system: Set(system.to_string()),
            name: Set(name.to_string()),
            description: Set(description.to_string()),
            permissions: Set(permissions),
            created_at: Set(now.into()),
            updated_at: Set(now.into()),
        }
    }
}
