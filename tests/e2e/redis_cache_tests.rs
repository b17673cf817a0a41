//! Permission checks with the Redis-backed cache

#[cfg(test)]
mod tests {
    use crate::common::TestDatabase;
    use crate::common::fixtures::{COMMON_UID, SYSTEM, seed_cowshed};
    use crate::skip_without_env;
    use rbac_rs::config::RedisConfig;
    use rbac_rs::storage::redis::RedisPool;
    use rbac_rs::{PermissionCache, PermissionCacheOptions, Rbac, RedisPermissionCache};
    use std::sync::Arc;
    use uuid::Uuid;

    struct LiveRbac {
        rbac: Rbac,
        cache: Arc<RedisPermissionCache>,
        options: PermissionCacheOptions,
    }

    async fn live_rbac() -> LiveRbac {
        let config = RedisConfig {
            url: std::env::var("REDIS_URL").unwrap_or_default(),
            db: Some(15),
            ..Default::default()
        };
        let pool = Arc::new(RedisPool::new(&config).await.expect("connect to redis"));

        let options = PermissionCacheOptions {
            namespace: format!("rbac_e2e_{}", Uuid::new_v4().simple()),
            single_flight: true,
        };
        let cache = Arc::new(RedisPermissionCache::new(pool, &options.namespace));
        let store = TestDatabase::new().await;
        let rbac = Rbac::new(store.db_arc(), cache.clone(), options.clone());

        LiveRbac {
            rbac,
            cache,
            options,
        }
    }

    #[tokio::test]
    #[ignore]
    async fn test_cowshed_scenario_on_redis() {
        skip_without_env!("REDIS_URL");
        let live = live_rbac().await;
        seed_cowshed(&live.rbac).await;
        let rbac = &live.rbac;

        assert!(!rbac.is_permitted(SYSTEM, COMMON_UID, "manage").await.unwrap());
        assert!(rbac.is_permitted(SYSTEM, COMMON_UID, "write").await.unwrap());

        rbac.add_to_blacklist(SYSTEM, COMMON_UID, &["write"]).await.unwrap();
        assert!(!rbac.is_permitted(SYSTEM, COMMON_UID, "write").await.unwrap());

        rbac.cache_manager().invalidate_all().await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_flush_is_scoped_to_namespace() {
        skip_without_env!("REDIS_URL");
        let live = live_rbac().await;
        seed_cowshed(&live.rbac).await;

        let bystander = format!("bystander_{}:permissions:1:x:y", Uuid::new_v4().simple());
        live.cache
            .add_members(&bystander, &["keep".to_string()])
            .await
            .unwrap();
        live.rbac.reload(SYSTEM, COMMON_UID).await.unwrap();

        live.rbac
            .grant_permissions_to_role(SYSTEM, "common", &["manage"])
            .await
            .unwrap();

        assert!(
            live.rbac
                .cached_permissions(SYSTEM, COMMON_UID)
                .await
                .unwrap()
                .is_none()
        );
        assert!(live.cache.exists(&bystander).await.unwrap());
        assert!(live.cache.delete(&bystander).await.unwrap());
    }

    #[tokio::test]
    #[ignore]
    async fn test_concurrent_misses_load_once() {
        skip_without_env!("REDIS_URL");
        let live = live_rbac().await;
        seed_cowshed(&live.rbac).await;
        assert!(live.options.single_flight);

        let rbac = Arc::new(live.rbac);
        let checks: Vec<_> = (0..32)
            .map(|_| {
                let rbac = Arc::clone(&rbac);
                tokio::spawn(async move { rbac.is_permitted(SYSTEM, COMMON_UID, "read").await })
            })
            .collect();

        for check in checks {
            assert!(check.await.unwrap().unwrap());
        }

        let stats = rbac.cache_stats();
        assert_eq!(stats.hits + stats.misses, 32);
        rbac.cache_manager().invalidate_all().await.unwrap();
    }

    #[tokio::test]
    #[ignore]
    async fn test_redis_health() {
        skip_without_env!("REDIS_URL");
        let live = live_rbac().await;

        let status = live.rbac.health_check().await;
        assert!(status.cache);
        assert_eq!(status.cache_backend, "redis");
        assert!(status.overall);
    }
}
