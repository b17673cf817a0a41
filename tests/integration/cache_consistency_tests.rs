//! Cache consistency tests
//!
//! Cache entries are created on a miss and dropped by writes, never updated
//! in place.

#[cfg(test)]
mod tests {
    use crate::common::TestRbac;
    use crate::common::fixtures::{COMMON_UID, SYSTEM, seed_cowshed, unique_uid};
    use rbac_rs::{PermissionCache, PermissionCacheOptions};
    use std::sync::Arc;

    #[tokio::test]
    async fn test_entry_created_on_first_check() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;

        assert!(
            test.rbac
                .cached_permissions(SYSTEM, COMMON_UID)
                .await
                .unwrap()
                .is_none()
        );

        test.rbac.is_permitted(SYSTEM, COMMON_UID, "read").await.unwrap();

        let cached = test
            .rbac
            .cached_permissions(SYSTEM, COMMON_UID)
            .await
            .unwrap()
            .unwrap();
        assert_eq!(cached.into_iter().collect::<Vec<_>>(), vec!["read", "write"]);
    }

    #[tokio::test]
    async fn test_hits_do_not_reach_the_store() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;

        for _ in 0..10 {
            test.rbac.is_permitted(SYSTEM, COMMON_UID, "read").await.unwrap();
            test.rbac.is_permitted(SYSTEM, COMMON_UID, "manage").await.unwrap();
        }

        let stats = test.rbac.cache_stats();
        assert_eq!(stats.misses, 1);
        assert_eq!(stats.hits, 9);
        assert_eq!(stats.denials, 10);
        assert!(stats.hit_rate() > 0.9);
    }

    #[tokio::test]
    async fn test_user_without_permissions_is_never_materialized() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;
        let uid = unique_uid();
        test.rbac.register_user::<&str>(SYSTEM, &uid, &[]).await.unwrap();

        assert!(!test.rbac.is_permitted(SYSTEM, &uid, "read").await.unwrap());
        assert!(!test.rbac.is_permitted(SYSTEM, &uid, "read").await.unwrap());

        assert!(test.rbac.cached_permissions(SYSTEM, &uid).await.unwrap().is_none());
        assert_eq!(test.rbac.cache_stats().misses, 2);
    }

    #[tokio::test]
    async fn test_flush_keeps_other_namespaces() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;

        let foreign = "other:permissions:7:Cowshed:uid_common";
        test.cache
            .add_members(foreign, &["read".to_string()])
            .await
            .unwrap();
        test.rbac.reload(SYSTEM, COMMON_UID).await.unwrap();

        test.rbac
            .grant_permissions_to_role(SYSTEM, "admin", &["audit"])
            .await
            .unwrap();

        assert!(test.cache.exists(foreign).await.unwrap());
        assert_eq!(test.cache.len(), 1);
    }

    #[tokio::test]
    async fn test_read_after_write_is_fresh() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;
        let rbac = &test.rbac;

        assert!(rbac.is_permitted(SYSTEM, COMMON_UID, "write").await.unwrap());
        rbac.update_roles(SYSTEM, COMMON_UID, &["admin"]).await.unwrap();
        assert!(rbac.is_permitted(SYSTEM, COMMON_UID, "manage").await.unwrap());

        rbac.remove_role(SYSTEM, COMMON_UID, "admin").await.unwrap();
        assert!(!rbac.is_permitted(SYSTEM, COMMON_UID, "read").await.unwrap());

        rbac.update_user(SYSTEM, COMMON_UID, &["common"]).await.unwrap();
        assert!(rbac.is_permitted(SYSTEM, COMMON_UID, "read").await.unwrap());
    }

    #[tokio::test]
    async fn test_concurrent_checks_agree() {
        let test = TestRbac::with_options(PermissionCacheOptions {
            namespace: "rbac".to_string(),
            single_flight: true,
        })
        .await;
        seed_cowshed(&test.rbac).await;

        let rbac = Arc::new(test.rbac);
        let checks: Vec<_> = (0..16)
            .map(|i| {
                let rbac = Arc::clone(&rbac);
                let permission = if i % 2 == 0 { "write" } else { "manage" };
                tokio::spawn(async move {
                    let permit = rbac.is_permitted(SYSTEM, COMMON_UID, permission).await;
                    (permission, permit)
                })
            })
            .collect();

        for check in checks {
            let (permission, permit) = check.await.unwrap();
            assert_eq!(permit.unwrap(), permission == "write");
        }
        assert_eq!(test.cache.len(), 1);
    }
}
