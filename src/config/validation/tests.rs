//! Tests for configuration validators

use super::trait_def::Validate;
use crate::config::models::*;

#[test]
fn test_default_config_is_valid() {
    assert!(RbacConfig::default().validate().is_ok());
}

#[test]
fn test_server_port_zero_rejected() {
    let config = ServerConfig {
        port: 0,
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_server_zero_workers_rejected() {
    let config = ServerConfig {
        workers: Some(0),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_database_url_scheme() {
    let mut config = DatabaseConfig::default();
    assert!(config.validate().is_ok());

    config.url = "postgres://rbac@localhost/rbac".to_string();
    assert!(config.validate().is_ok());

    config.url = "mysql://localhost/rbac".to_string();
    assert!(config.validate().is_err());

    config.url = String::new();
    assert!(config.validate().is_err());
}

#[test]
fn test_redis_url_scheme() {
    let mut config = RedisConfig::default();
    assert!(config.validate().is_ok());

    config.url = "http://localhost:6379".to_string();
    assert!(config.validate().is_err());
}

#[test]
fn test_redis_negative_db_rejected() {
    let config = RedisConfig {
        db: Some(-1),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_redis_empty_sentinel_master_rejected() {
    let config = RedisConfig {
        sentinel_master: Some(String::new()),
        ..Default::default()
    };
    assert!(config.validate().is_err());
}

#[test]
fn test_cache_namespace_rules() {
    let mut config = CacheConfig::default();
    assert!(config.validate().is_ok());

    config.namespace = String::new();
    assert!(config.validate().is_err());

    config.namespace = "rbac*".to_string();
    assert!(config.validate().is_err());

    config.namespace = "tenant:rbac".to_string();
    assert!(config.validate().is_err());

    config.namespace = "tenant-a.rbac".to_string();
    assert!(config.validate().is_ok());
}

#[test]
fn test_log_level_directive() {
    let mut config = LogConfig::default();
    assert!(config.validate().is_ok());

    config.level = "rbac_rs=debug,actix_web=warn".to_string();
    assert!(config.validate().is_ok());

    config.level = "rbac_rs=loud".to_string();
    assert!(config.validate().is_err());
}
