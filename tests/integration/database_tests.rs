//! Durable store integration tests

#[cfg(test)]
mod tests {
    use crate::common::fixtures::{COMMON_UID, SYSTEM, seed_cowshed};
    use crate::common::{TestDatabase, TestRbac};
    use rbac_rs::config::DatabaseConfig;
    use rbac_rs::core::models::UserPermModel;
    use rbac_rs::core::resolver::resolve_user;
    use rbac_rs::storage::database::Database;
    use tempfile::TempDir;

    #[tokio::test]
    async fn test_store_resolves_seeded_user() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;

        let effective = resolve_user(test.store.db(), SYSTEM, COMMON_UID)
            .await
            .unwrap();
        assert_eq!(effective.into_vec(), vec!["read", "write"]);

        let missing = resolve_user(test.store.db(), SYSTEM, "ghost").await;
        assert!(missing.unwrap_err().is_not_found());
    }

    #[tokio::test]
    async fn test_stats_count_rows() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;

        let stats = test.store.db().stats().await.unwrap();
        assert_eq!(stats.permissions, 3);
        assert_eq!(stats.roles, 2);
        assert_eq!(stats.users, 1);
    }

    #[tokio::test]
    async fn test_list_users_of_system() {
        let db = TestDatabase::new().await;
        for uid in ["b", "a", "c"] {
            db.db()
                .upsert_user(&UserPermModel::new(SYSTEM, uid, Vec::<String>::new()))
                .await
                .unwrap();
        }
        db.db()
            .upsert_user(&UserPermModel::new("Barn", "z", Vec::<String>::new()))
            .await
            .unwrap();

        let users = db.db().list_users(SYSTEM).await.unwrap();
        let uids: Vec<&str> = users.iter().map(|user| user.uid.as_str()).collect();
        assert_eq!(uids, vec!["a", "b", "c"]);
    }

    #[tokio::test]
    async fn test_file_backed_store_survives_reconnect() {
        let dir = TempDir::new().unwrap();
        let config = DatabaseConfig {
            url: format!(
                "sqlite://{}?mode=rwc",
                dir.path().join("data").join("rbac.db").display()
            ),
            max_connections: 1,
            ..Default::default()
        };

        {
            let db = Database::new(&config).await.unwrap();
            db.migrate().await.unwrap();
            db.upsert_role(SYSTEM, "common", "regular staff", ["read"].into_iter().collect())
                .await
                .unwrap();
            db.close().await.unwrap();
        }

        let db = Database::new(&config).await.unwrap();
        db.migrate().await.unwrap();
        let permissions = db.role_permissions(SYSTEM, "common").await.unwrap();
        assert!(permissions.contains("read"));
    }
}
