//! Configuration management for the RBAC service
//!
//! This module handles loading, validation, and management of all service configuration.

pub mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{RbacError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub rbac: RbacConfig,
}

impl Config {
    /// Load configuration from a YAML file, then apply environment overrides
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| RbacError::Config(format!("Failed to read config file: {}", e)))?;

        let mut config = Self::from_yaml_str(&content)?;
        config.rbac.apply_env_overrides()?;
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Parse configuration from YAML text without consulting the environment
    pub fn from_yaml_str(content: &str) -> Result<Self> {
        let rbac: RbacConfig = serde_yaml::from_str(content)
            .map_err(|e| RbacError::Config(format!("Failed to parse config: {}", e)))?;
        Ok(Self { rbac })
    }

    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let rbac = RbacConfig::from_env()?;
        let config = Self { rbac };

        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.rbac.server
    }

    /// Get storage configuration
    pub fn storage(&self) -> &StorageConfig {
        &self.rbac.storage
    }

    /// Get cache configuration
    pub fn cache(&self) -> &CacheConfig {
        &self.rbac.cache
    }

    /// Get logging configuration
    pub fn log(&self) -> &LogConfig {
        &self.rbac.log
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.rbac
            .server
            .validate()
            .map_err(|e| RbacError::Config(format!("Server config error: {}", e)))?;

        self.rbac
            .storage
            .validate()
            .map_err(|e| RbacError::Config(format!("Storage config error: {}", e)))?;

        self.rbac
            .cache
            .validate()
            .map_err(|e| RbacError::Config(format!("Cache config error: {}", e)))?;

        self.rbac
            .log
            .validate()
            .map_err(|e| RbacError::Config(format!("Log config error: {}", e)))?;

        debug!("Configuration validation completed");
        Ok(())
    }

    /// Merge with another configuration (other takes precedence)
    pub fn merge(mut self, other: Self) -> Self {
        self.rbac = self.rbac.merge(other.rbac);
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(&self.rbac)
            .map_err(|e| RbacError::Config(format!("Failed to serialize config to JSON: {}", e)))
    }

    /// Convert to YAML string
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(&self.rbac)
            .map_err(|e| RbacError::Config(format!("Failed to serialize config to YAML: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[tokio::test]
    async fn test_config_from_file() {
        let config_content = r#"
server:
  host: "127.0.0.1"
  port: 60002
storage:
  database:
    url: "sqlite::memory:"
    max_connections: 1
  redis:
    url: "redis://localhost:6379"
    db: 2
cache:
  backend: memory
  namespace: "tests"
log:
  level: "debug"
"#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(config_content.as_bytes()).unwrap();

        let config = Config::from_file(temp_file.path()).await.unwrap();
        assert_eq!(config.server().host, "127.0.0.1");
        assert_eq!(config.storage().database.max_connections, 1);
        assert_eq!(config.storage().redis.db, Some(2));
        assert_eq!(config.cache().backend, CacheBackend::Memory);
        assert_eq!(config.cache().namespace, "tests");
    }

    #[tokio::test]
    async fn test_missing_file_is_config_error() {
        let result = Config::from_file("/nonexistent/rbac.yaml").await;
        assert!(matches!(result, Err(RbacError::Config(_))));
    }

    #[test]
    fn test_empty_yaml_uses_defaults() {
        let config = Config::from_yaml_str("{}").unwrap();
        assert_eq!(config.server().port, 60001);
        assert_eq!(config.server().host, "0.0.0.0");
        assert_eq!(config.storage().redis.max_connections, 100);
        assert_eq!(config.cache().namespace, "rbac");
        assert!(!config.cache().single_flight);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_invalid_yaml_rejected() {
        assert!(Config::from_yaml_str("server: [unclosed").is_err());
    }

    #[test]
    fn test_env_overrides() {
        let vars: HashMap<&str, &str> = [
            ("RBAC_PORT", "7000"),
            ("REDIS_URL", "redis://cache:6379"),
            ("REDIS_PASSWORD", "hunter2"),
            ("REDIS_DB", "3"),
            ("REDIS_SENTINEL_MASTER", "mymaster"),
            ("RBAC_CACHE_BACKEND", "memory"),
            ("RBAC_CACHE_NAMESPACE", "staging"),
        ]
        .into_iter()
        .collect();

        let mut config = RbacConfig::default();
        config
            .apply_overrides_with(|key| vars.get(key).map(|v| v.to_string()))
            .unwrap();

        assert_eq!(config.server.port, 7000);
        assert_eq!(config.storage.redis.url, "redis://cache:6379");
        assert_eq!(config.storage.redis.password.as_deref(), Some("hunter2"));
        assert_eq!(config.storage.redis.db, Some(3));
        assert_eq!(
            config.storage.redis.sentinel_master.as_deref(),
            Some("mymaster")
        );
        assert_eq!(config.cache.backend, CacheBackend::Memory);
        assert_eq!(config.cache.namespace, "staging");
    }

    #[test]
    fn test_env_override_bad_number() {
        let mut config = RbacConfig::default();
        let result = config.apply_overrides_with(|key| {
            (key == "RBAC_PORT").then(|| "not-a-port".to_string())
        });
        assert!(matches!(result, Err(RbacError::Config(_))));
    }

    #[test]
    fn test_merge_prefers_other() {
        let base = Config::default();
        let mut other = Config::default();
        other.rbac.server.port = 9000;
        other.rbac.cache.single_flight = true;

        let merged = base.merge(other);
        assert_eq!(merged.server().port, 9000);
        assert!(merged.cache().single_flight);
        assert_eq!(merged.cache().namespace, "rbac");
    }

    #[test]
    fn test_masked_redis_url() {
        let config = RedisConfig {
            url: "redis://:secret@localhost:6379/0".to_string(),
            ..Default::default()
        };
        let masked = config.masked_url();
        assert!(!masked.contains("secret"));
        assert!(masked.contains("localhost"));
    }

    #[test]
    fn test_yaml_round_trip_keeps_values() {
        let mut config = Config::default();
        config.rbac.storage.redis.retry_times = 7;
        let yaml = config.to_yaml().unwrap();
        let parsed = Config::from_yaml_str(&yaml).unwrap();
        assert_eq!(parsed.storage().redis.retry_times, 7);
        assert!(config.to_json().unwrap().contains("\"namespace\""));
    }
}
