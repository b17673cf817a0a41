//! Configuration loading and validation tests

#[cfg(test)]
mod tests {
    use rbac_rs::config::{CacheBackend, Config, RbacConfig};
    use std::collections::HashMap;
    use std::io::Write;
    use tempfile::NamedTempFile;

    const FULL_CONFIG: &str = r#"
server:
  host: "127.0.0.1"
  port: 9090
  workers: 2
  timeout: 15
storage:
  database:
    url: "sqlite::memory:"
    max_connections: 1
  redis:
    url: "redis://cache.internal:6379"
    db: 3
    retry_times: 5
cache:
  backend: memory
  namespace: "acl"
  single_flight: true
log:
  level: "debug"
  json: true
"#;

    #[tokio::test]
    async fn test_full_config_file() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(FULL_CONFIG.as_bytes()).unwrap();

        let config = Config::from_file(file.path()).await.unwrap();

        assert_eq!(config.server().address(), "127.0.0.1:9090");
        assert_eq!(config.server().workers, Some(2));
        assert_eq!(config.storage().redis.db, Some(3));
        assert_eq!(config.storage().redis.retry_times, 5);
        assert_eq!(config.cache().backend, CacheBackend::Memory);
        assert_eq!(config.cache().namespace, "acl");
        assert!(config.cache().single_flight);
        assert!(config.log().json);
    }

    #[test]
    fn test_partial_config_keeps_defaults() {
        let config = Config::from_yaml_str("server:\n  port: 7000\n").unwrap();
        let defaults = Config::default();

        assert_eq!(config.server().port, 7000);
        assert_eq!(config.server().host, defaults.server().host);
        assert_eq!(config.cache().namespace, defaults.cache().namespace);
        assert_eq!(config.cache().backend, CacheBackend::Redis);
        assert!(!config.cache().single_flight);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_reserved_namespace_characters_rejected() {
        for namespace in ["", "rbac:v2", "rb*c", "a b", "[x]"] {
            let mut config = Config::default();
            config.rbac.cache.namespace = namespace.to_string();
            assert!(config.validate().is_err(), "namespace {:?}", namespace);
        }
    }

    #[test]
    fn test_unsupported_urls_rejected() {
        let mut config = Config::default();
        config.rbac.storage.database.url = "mysql://localhost/rbac".to_string();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.rbac.storage.redis.url = "http://localhost:6379".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_take_precedence_over_file() {
        let mut config = Config::from_yaml_str(FULL_CONFIG).unwrap();
        let vars: HashMap<&str, &str> = HashMap::from([
            ("RBAC_PORT", "8181"),
            ("RBAC_CACHE_BACKEND", "redis"),
            ("RBAC_CACHE_NAMESPACE", "tenant_a"),
        ]);

        config
            .rbac
            .apply_overrides_with(|key| vars.get(key).map(|value| value.to_string()))
            .unwrap();

        assert_eq!(config.server().port, 8181);
        assert_eq!(config.cache().backend, CacheBackend::Redis);
        assert_eq!(config.cache().namespace, "tenant_a");
        assert_eq!(config.server().host, "127.0.0.1");
    }

    #[test]
    fn test_unknown_cache_backend_override() {
        let mut rbac = RbacConfig::default();
        let result = rbac.apply_overrides_with(|key| {
            (key == "RBAC_CACHE_BACKEND").then(|| "memcached".to_string())
        });
        assert!(result.is_err());
    }

    #[test]
    fn test_yaml_round_trip_preserves_settings() {
        let config = Config::from_yaml_str(FULL_CONFIG).unwrap();
        let reparsed = Config::from_yaml_str(&config.to_yaml().unwrap()).unwrap();

        assert_eq!(reparsed.server().port, 9090);
        assert_eq!(reparsed.cache().namespace, "acl");
        assert_eq!(reparsed.cache().backend, CacheBackend::Memory);
    }
}
