//! Test store utilities
//!
//! Each helper creates an isolated in-memory SQLite database.

use rbac_rs::config::DatabaseConfig;
use rbac_rs::storage::database::Database;
use rbac_rs::{MemoryPermissionCache, PermissionCacheOptions, Rbac};
use std::sync::Arc;

/// Test database wrapper providing isolated in-memory SQLite instances
#[derive(Debug, Clone)]
pub struct TestDatabase {
    inner: Arc<Database>,
}

impl TestDatabase {
    /// Create a new in-memory test database with migrations applied
    pub async fn new() -> Self {
        let db = Database::new(&test_db_config())
            .await
            .expect("Failed to create in-memory test database");

        db.migrate()
            .await
            .expect("Failed to run database migrations");

        Self {
            inner: Arc::new(db),
        }
    }

    pub fn db(&self) -> &Database {
        &self.inner
    }

    pub fn db_arc(&self) -> Arc<Database> {
        Arc::clone(&self.inner)
    }
}

/// Facade over a fresh in-memory store and cache, with handles to both
pub struct TestRbac {
    pub rbac: Rbac,
    pub store: TestDatabase,
    pub cache: Arc<MemoryPermissionCache>,
}

impl TestRbac {
    pub async fn new() -> Self {
        Self::with_options(PermissionCacheOptions::default()).await
    }

    pub async fn with_options(options: PermissionCacheOptions) -> Self {
        let store = TestDatabase::new().await;
        let cache = Arc::new(MemoryPermissionCache::new(&options.namespace));
        let rbac = Rbac::new(store.db_arc(), cache.clone(), options);

        Self { rbac, store, cache }
    }
}

/// In-memory SQLite allows a single connection
pub fn test_db_config() -> DatabaseConfig {
    DatabaseConfig {
        url: "sqlite::memory:".to_string(),
        max_connections: 1,
        connection_timeout: 5,
        ..Default::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_database_creation() {
        let db = TestDatabase::new().await;
        assert!(db.db().health_check().await.is_ok());
    }

    #[tokio::test]
    async fn test_rbac_creation() {
        let test = TestRbac::new().await;
        assert!(test.rbac.health_check().await.overall);
        assert!(test.cache.is_empty());
    }
}
