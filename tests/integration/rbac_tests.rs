//! Facade integration tests
//!
//! Permit checks through the whole stack after each kind of write.

#[cfg(test)]
mod tests {
    use crate::common::TestRbac;
    use crate::common::fixtures::{COMMON_UID, SYSTEM, seed_cowshed, unique_uid};

    #[tokio::test]
    async fn test_cowshed_scenario() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;
        let rbac = &test.rbac;

        assert!(!rbac.is_permitted(SYSTEM, COMMON_UID, "manage").await.unwrap());
        assert!(rbac.is_permitted(SYSTEM, COMMON_UID, "write").await.unwrap());

        rbac.add_to_blacklist(SYSTEM, COMMON_UID, &["write"])
            .await
            .unwrap();

        assert!(!rbac.is_permitted(SYSTEM, COMMON_UID, "write").await.unwrap());
    }

    #[tokio::test]
    async fn test_unknown_user_has_no_permissions() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;

        for permission in ["read", "write", "manage", "anything"] {
            assert!(
                !test
                    .rbac
                    .is_permitted(SYSTEM, "no-such-uid", permission)
                    .await
                    .unwrap()
            );
        }
        assert!(test.cache.is_empty());
    }

    #[tokio::test]
    async fn test_blacklist_beats_whitelist() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;
        let rbac = &test.rbac;

        rbac.add_to_whitelist(SYSTEM, COMMON_UID, &["audit"]).await.unwrap();
        assert!(rbac.is_permitted(SYSTEM, COMMON_UID, "audit").await.unwrap());

        rbac.add_to_blacklist(SYSTEM, COMMON_UID, &["audit"]).await.unwrap();
        assert!(!rbac.is_permitted(SYSTEM, COMMON_UID, "audit").await.unwrap());
    }

    #[tokio::test]
    async fn test_whitelist_grants_without_role() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;
        let uid = unique_uid();

        test.rbac.register_user::<&str>(SYSTEM, &uid, &[]).await.unwrap();
        assert!(!test.rbac.is_permitted(SYSTEM, &uid, "manage").await.unwrap());

        test.rbac
            .update_whitelist(SYSTEM, &uid, &["manage"])
            .await
            .unwrap();
        assert!(test.rbac.is_permitted(SYSTEM, &uid, "manage").await.unwrap());
    }

    #[tokio::test]
    async fn test_reload_agrees_with_store() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;
        let rbac = &test.rbac;

        rbac.add_roles(SYSTEM, COMMON_UID, &["admin"]).await.unwrap();
        rbac.add_to_blacklist(SYSTEM, COMMON_UID, &["write"]).await.unwrap();

        let first = rbac.reload(SYSTEM, COMMON_UID).await.unwrap();
        let second = rbac.reload(SYSTEM, COMMON_UID).await.unwrap();
        assert_eq!(first, second);
        assert_eq!(first.clone().into_vec(), vec!["manage", "read"]);

        for permission in ["read", "write", "manage", "delete"] {
            assert_eq!(
                rbac.is_permitted(SYSTEM, COMMON_UID, permission).await.unwrap(),
                first.contains(permission),
                "permission {}",
                permission
            );
        }
    }

    #[tokio::test]
    async fn test_role_grant_reaches_users_without_touching_them() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;
        let rbac = &test.rbac;

        let uids: Vec<String> = (0..5).map(|_| unique_uid()).collect();
        for uid in &uids {
            rbac.register_user(SYSTEM, uid, &["common"]).await.unwrap();
            assert!(!rbac.is_permitted(SYSTEM, uid, "manage").await.unwrap());
        }

        rbac.grant_permissions_to_role(SYSTEM, "common", &["manage"])
            .await
            .unwrap();

        for uid in &uids {
            assert!(rbac.is_permitted(SYSTEM, uid, "manage").await.unwrap());
        }
    }

    #[tokio::test]
    async fn test_deleted_role_degrades_gracefully() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;
        let rbac = &test.rbac;

        rbac.add_roles(SYSTEM, COMMON_UID, &["admin"]).await.unwrap();
        assert!(rbac.is_permitted(SYSTEM, COMMON_UID, "manage").await.unwrap());

        rbac.unregister_role(SYSTEM, "admin").await.unwrap();

        assert!(!rbac.is_permitted(SYSTEM, COMMON_UID, "manage").await.unwrap());
        assert!(rbac.is_permitted(SYSTEM, COMMON_UID, "read").await.unwrap());
    }

    #[tokio::test]
    async fn test_systems_are_isolated() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;
        let rbac = &test.rbac;

        rbac.register_role("Barn", "common", "", &["feed"]).await.unwrap();
        rbac.register_user("Barn", COMMON_UID, &["common"]).await.unwrap();

        assert!(rbac.is_permitted("Barn", COMMON_UID, "feed").await.unwrap());
        assert!(!rbac.is_permitted("Barn", COMMON_UID, "read").await.unwrap());
        assert!(!rbac.is_permitted(SYSTEM, COMMON_UID, "feed").await.unwrap());
    }

    #[tokio::test]
    async fn test_catalogue_queries() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;
        let rbac = &test.rbac;

        let permissions = rbac.permissions_of_system(SYSTEM).await.unwrap();
        assert_eq!(permissions.len(), 3);

        let roles = rbac.roles_of_system(SYSTEM).await.unwrap();
        let names: Vec<&str> = roles.iter().map(|role| role.name.as_str()).collect();
        assert_eq!(names, vec!["admin", "common"]);

        let role = rbac.role(SYSTEM, "common").await.unwrap();
        assert_eq!(role.description, "regular staff");

        let user = rbac.user(SYSTEM, COMMON_UID).await.unwrap();
        assert_eq!(user.roles.clone().into_vec(), vec!["common"]);
        assert!(user.blacklist.is_empty());
    }
}
