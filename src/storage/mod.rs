//! Storage layer for the RBAC service
//!
//! This module provides the durable store and the permission cache backends.

/// Permission cache backends
pub mod cache;
/// Database storage module
pub mod database;
/// Redis connection pool
pub mod redis;

use crate::config::Config;
use crate::utils::error::Result;
use cache::PermissionCache;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Main storage layer that owns every backing store
#[derive(Clone)]
pub struct StorageLayer {
    /// Durable store
    pub database: Arc<database::Database>,
    /// Permission cache store
    pub cache: Arc<dyn PermissionCache>,
}

impl StorageLayer {
    /// Connect every configured backend and run migrations
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Initializing storage layer");

        debug!("Connecting to database");
        let database = Arc::new(database::Database::new(&config.storage().database).await?);
        database.migrate().await?;

        debug!("Connecting to permission cache");
        let cache = cache::connect_cache(config.cache(), &config.storage().redis).await?;

        info!("Storage layer initialized successfully");
        Ok(Self { database, cache })
    }

    /// Assemble from already connected backends
    pub fn from_parts(database: Arc<database::Database>, cache: Arc<dyn PermissionCache>) -> Self {
        Self { database, cache }
    }

    /// Health check for all storage backends
    pub async fn health_check(&self) -> StorageHealthStatus {
        let mut status = StorageHealthStatus {
            database: false,
            cache: false,
            cache_backend: self.cache.backend_name(),
            overall: false,
        };

        match self.database.health_check().await {
            Ok(_) => status.database = true,
            Err(e) => {
                warn!("Database health check failed: {}", e);
            }
        }

        match self.cache.health_check().await {
            Ok(_) => status.cache = true,
            Err(e) => {
                warn!("Cache health check failed: {}", e);
            }
        }

        status.overall = status.database && status.cache;
        status
    }

    /// Close all connections
    pub async fn close(&self) -> Result<()> {
        info!("Closing storage connections");

        self.cache.close().await?;
        self.database.close().await?;

        info!("Storage connections closed");
        Ok(())
    }
}

impl std::fmt::Debug for StorageLayer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageLayer")
            .field("database", &self.database.backend_type())
            .field("cache", &self.cache.backend_name())
            .finish()
    }
}

/// Storage health status
#[derive(Debug, Clone, Serialize)]
pub struct StorageHealthStatus {
    /// Durable store reachable
    pub database: bool,
    /// Cache store reachable
    pub cache: bool,
    /// Which cache backend answered
    pub cache_backend: &'static str,
    /// Overall health
    pub overall: bool,
}
