//! Configuration data models
//!
//! This module defines all configuration structures used by the RBAC service.

#![allow(missing_docs)]

pub mod cache;
pub mod log;
pub mod rbac;
pub mod server;
pub mod storage;

pub use cache::*;
pub use log::*;
pub use rbac::*;
pub use server::*;
pub use storage::*;

/// Default values for configuration
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    60001
}

/// Default request timeout in seconds
pub fn default_timeout() -> u64 {
    30
}

/// Default durable store URL
pub fn default_database_url() -> String {
    "sqlite://data/rbac.db?mode=rwc".to_string()
}

pub fn default_max_connections() -> u32 {
    10
}

/// Default connection timeout in seconds
pub fn default_connection_timeout() -> u64 {
    5
}

/// Default pool acquire timeout in seconds
pub fn default_acquire_timeout() -> u64 {
    30
}

pub fn default_redis_url() -> String {
    "redis://127.0.0.1:6379".to_string()
}

pub fn default_redis_max_connections() -> u32 {
    100
}

/// Default number of retries after a failed Redis dial
pub fn default_retry_times() -> u32 {
    3
}

pub fn default_retry_interval_ms() -> u64 {
    200
}

/// Default cache key namespace
pub fn default_namespace() -> String {
    "rbac".to_string()
}

pub fn default_log_level() -> String {
    "info".to_string()
}
