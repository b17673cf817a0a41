use sea_orm::DatabaseConnection;

/// SeaORM-based durable store
#[derive(Debug, Clone)]
pub struct SeaOrmDatabase {
    pub(super) db: DatabaseConnection,
    /// Backend type indicator
    pub(super) backend_type: DatabaseBackendType,
}

/// Database backend type indicator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DatabaseBackendType {
    PostgreSQL,
    SQLite,
}

impl DatabaseBackendType {
    pub fn from_url(url: &str) -> Self {
        if url.starts_with("sqlite") {
            Self::SQLite
        } else {
            Self::PostgreSQL
        }
    }
}

/// Row counts per table
#[derive(Debug, Clone, Default, serde::Serialize)]
pub struct DatabaseStats {
    pub permissions: u64,
    pub roles: u64,
    pub users: u64,
}
