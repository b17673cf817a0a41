//! Error types for the RBAC service

use thiserror::Error;

/// Result type alias for the RBAC service
pub type Result<T> = std::result::Result<T, RbacError>;

/// Main error type for the RBAC service
#[derive(Error, Debug)]
pub enum RbacError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Durable store errors
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// Cache store errors
    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Referenced record (permission, role, user) is absent
    #[error("Not found: {0}")]
    NotFound(String),

    /// Malformed identifiers or request parameters
    #[error("Validation error: {0}")]
    Validation(String),

    /// Record already exists under the requested identity
    #[error("Conflict: {0}")]
    Conflict(String),

    /// Backing store reachable but not serving requests
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Internal errors
    #[error("Internal error: {0}")]
    Internal(String),
}
