//! Configuration loading utilities
//!
//! Environment variables override whatever the YAML file (or the defaults) set.

use super::models::*;
use crate::utils::error::{RbacError, Result};
use std::env;
use std::str::FromStr;
use tracing::debug;

impl RbacConfig {
    /// Load configuration from defaults plus environment variables
    pub fn from_env() -> Result<Self> {
        let mut config = Self::default();
        config.apply_env_overrides()?;
        Ok(config)
    }

    /// Apply overrides from the process environment
    pub fn apply_env_overrides(&mut self) -> Result<()> {
        self.apply_overrides_with(|key| env::var(key).ok())
    }

    /// Apply overrides using `lookup` to resolve variable names
    pub fn apply_overrides_with<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying configuration overrides from environment");

        // Server configuration
        if let Some(host) = lookup("RBAC_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("RBAC_PORT") {
            self.server.port = parse_var("RBAC_PORT", &port)?;
        }
        if let Some(workers) = lookup("RBAC_WORKERS") {
            self.server.workers = Some(parse_var("RBAC_WORKERS", &workers)?);
        }

        // Durable store configuration
        if let Some(url) = lookup("DATABASE_URL") {
            self.storage.database.url = url;
        }
        if let Some(max_conn) = lookup("DATABASE_MAX_CONNECTIONS") {
            self.storage.database.max_connections =
                parse_var("DATABASE_MAX_CONNECTIONS", &max_conn)?;
        }

        // Redis configuration
        if let Some(url) = lookup("REDIS_URL") {
            self.storage.redis.url = url;
        }
        if let Some(password) = lookup("REDIS_PASSWORD") {
            self.storage.redis.password = Some(password);
        }
        if let Some(db) = lookup("REDIS_DB") {
            self.storage.redis.db = Some(parse_var("REDIS_DB", &db)?);
        }
        if let Some(max_conn) = lookup("REDIS_MAX_CONNECTIONS") {
            self.storage.redis.max_connections = parse_var("REDIS_MAX_CONNECTIONS", &max_conn)?;
        }
        if let Some(master) = lookup("REDIS_SENTINEL_MASTER") {
            self.storage.redis.sentinel_master = Some(master);
        }

        // Cache configuration
        if let Some(backend) = lookup("RBAC_CACHE_BACKEND") {
            self.cache.backend = CacheBackend::from_str(&backend).map_err(RbacError::Config)?;
        }
        if let Some(namespace) = lookup("RBAC_CACHE_NAMESPACE") {
            self.cache.namespace = namespace;
        }

        if let Some(level) = lookup("RBAC_LOG_LEVEL") {
            self.log.level = level;
        }

        Ok(())
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| RbacError::Config(format!("Invalid {}: {}", name, e)))
}
