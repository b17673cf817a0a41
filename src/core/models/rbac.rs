//! Permission, role and user records

use super::NameSet;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A named action within a system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Permission {
    pub system: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A named bundle of permissions within a system
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Role {
    pub system: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Permission names; may outlive the permission records they name
    #[serde(default)]
    pub permissions: NameSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Per-user role assignments plus explicit grants and denials
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserPermModel {
    pub system: String,
    pub uid: String,
    /// Role names held by the user
    #[serde(default)]
    pub roles: NameSet,
    /// Permission names always denied
    #[serde(default)]
    pub blacklist: NameSet,
    /// Permission names always granted, unless also blacklisted
    #[serde(default)]
    pub whitelist: NameSet,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl UserPermModel {
    /// Fresh model with the given roles and empty lists
    pub fn new<S, I>(system: S, uid: S, roles: I) -> Self
    where
        S: Into<String>,
        I: IntoIterator,
        I::Item: Into<String>,
    {
        let now = Utc::now();
        Self {
            system: system.into(),
            uid: uid.into(),
            roles: roles.into_iter().collect(),
            blacklist: NameSet::new(),
            whitelist: NameSet::new(),
            created_at: now,
            updated_at: now,
        }
    }
}
