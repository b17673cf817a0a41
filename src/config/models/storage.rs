//! Storage configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Storage configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct StorageConfig {
    /// Durable store configuration
    #[serde(default)]
    pub database: DatabaseConfig,
    /// Redis cache store configuration
    #[serde(default)]
    pub redis: RedisConfig,
}

impl StorageConfig {
    /// Merge storage configurations
    pub fn merge(mut self, other: Self) -> Self {
        self.database = self.database.merge(other.database);
        self.redis = self.redis.merge(other.redis);
        self
    }
}

/// Durable store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// Database URL (`sqlite://` or `postgres://`)
    #[serde(default = "default_database_url")]
    pub url: String,
    /// Maximum connections
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Pool acquire timeout in seconds
    #[serde(default = "default_acquire_timeout")]
    pub acquire_timeout: u64,
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: default_database_url(),
            max_connections: default_max_connections(),
            connection_timeout: default_connection_timeout(),
            acquire_timeout: default_acquire_timeout(),
        }
    }
}

impl DatabaseConfig {
    /// Merge database configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != default_database_url() {
            self.url = other.url;
        }
        if other.max_connections != default_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        if other.acquire_timeout != default_acquire_timeout() {
            self.acquire_timeout = other.acquire_timeout;
        }
        self
    }
}

/// Redis configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RedisConfig {
    /// Redis URL, or the sentinel address when `sentinel_master` is set
    #[serde(default = "default_redis_url")]
    pub url: String,
    /// Password overriding the one embedded in the URL
    #[serde(default)]
    pub password: Option<String>,
    /// Logical database overriding the one embedded in the URL
    #[serde(default)]
    pub db: Option<i64>,
    /// Maximum concurrent in-flight commands
    #[serde(default = "default_redis_max_connections")]
    pub max_connections: u32,
    /// Connection timeout in seconds
    #[serde(default = "default_connection_timeout")]
    pub connection_timeout: u64,
    /// Retries after a failed dial or broken connection
    #[serde(default = "default_retry_times")]
    pub retry_times: u32,
    /// Fixed pause between retries in milliseconds
    #[serde(default = "default_retry_interval_ms")]
    pub retry_interval_ms: u64,
    /// Sentinel master name; enables master discovery
    #[serde(default)]
    pub sentinel_master: Option<String>,
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: default_redis_url(),
            password: None,
            db: None,
            max_connections: default_redis_max_connections(),
            connection_timeout: default_connection_timeout(),
            retry_times: default_retry_times(),
            retry_interval_ms: default_retry_interval_ms(),
            sentinel_master: None,
        }
    }
}

impl RedisConfig {
    /// Merge redis configurations
    pub fn merge(mut self, other: Self) -> Self {
        if !other.url.is_empty() && other.url != default_redis_url() {
            self.url = other.url;
        }
        if other.password.is_some() {
            self.password = other.password;
        }
        if other.db.is_some() {
            self.db = other.db;
        }
        if other.max_connections != default_redis_max_connections() {
            self.max_connections = other.max_connections;
        }
        if other.connection_timeout != default_connection_timeout() {
            self.connection_timeout = other.connection_timeout;
        }
        if other.retry_times != default_retry_times() {
            self.retry_times = other.retry_times;
        }
        if other.retry_interval_ms != default_retry_interval_ms() {
            self.retry_interval_ms = other.retry_interval_ms;
        }
        if other.sentinel_master.is_some() {
            self.sentinel_master = other.sentinel_master;
        }
        self
    }

    /// URL with any embedded password replaced, for logging
    pub fn masked_url(&self) -> String {
        match url::Url::parse(&self.url) {
            Ok(mut parsed) => {
                if parsed.password().is_some() {
                    let _ = parsed.set_password(Some("***"));
                }
                parsed.to_string()
            }
            Err(_) => "<invalid redis url>".to_string(),
        }
    }
}
