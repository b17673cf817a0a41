//! Error classification tests
//!
//! Facade failures map onto the response envelope codes and HTTP statuses.

#[cfg(test)]
mod tests {
    use crate::common::TestRbac;
    use crate::common::fixtures::{COMMON_UID, SYSTEM, seed_cowshed};
    use actix_web::ResponseError;
    use actix_web::http::StatusCode;
    use rbac_rs::RbacError;
    use rbac_rs::utils::error::ErrCode;

    fn classify(error: &RbacError) -> (StatusCode, ErrCode) {
        let (status, code, _) = error.classify();
        (status, code)
    }

    #[tokio::test]
    async fn test_missing_parameter_is_bad_request() {
        let test = TestRbac::new().await;

        let error = test.rbac.is_permitted("", COMMON_UID, "read").await.unwrap_err();
        assert_eq!(classify(&error), (StatusCode::BAD_REQUEST, ErrCode::BadParams));
        assert!(error.to_string().contains("miss parameter[system]"));

        let error = test
            .rbac
            .register_role(SYSTEM, "", "", &["read"])
            .await
            .unwrap_err();
        assert!(error.to_string().contains("miss parameter[name]"));
    }

    #[tokio::test]
    async fn test_missing_entity_is_not_found_code() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;

        let errors = [
            test.rbac.role(SYSTEM, "ghost").await.unwrap_err(),
            test.rbac.user(SYSTEM, "ghost").await.unwrap_err(),
            test.rbac.reload(SYSTEM, "ghost").await.unwrap_err(),
            test.rbac.unregister_permission(SYSTEM, "ghost").await.unwrap_err(),
        ];

        for error in errors {
            assert!(error.is_not_found(), "{}", error);
            assert_eq!(classify(&error), (StatusCode::OK, ErrCode::NotFound));
        }
    }

    #[tokio::test]
    async fn test_rename_collision_is_conflict() {
        let test = TestRbac::new().await;
        seed_cowshed(&test.rbac).await;

        let error = test
            .rbac
            .update_role_name(SYSTEM, "common", "admin")
            .await
            .unwrap_err();
        assert_eq!(classify(&error), (StatusCode::CONFLICT, ErrCode::BadParams));
    }

    #[test]
    fn test_store_failures_are_unavailable() {
        let database = RbacError::Database(sea_orm::DbErr::Custom("connection reset".into()));
        assert!(database.is_store_unavailable());
        assert_eq!(database.status_code(), StatusCode::SERVICE_UNAVAILABLE);
        assert_eq!(database.classify().2, "Database operation failed");

        let cache = RbacError::unavailable("redis down");
        assert!(cache.is_store_unavailable());
        assert_eq!(
            classify(&cache),
            (StatusCode::SERVICE_UNAVAILABLE, ErrCode::InternalServerError)
        );
    }

    #[test]
    fn test_internal_details_are_not_exposed() {
        let error = RbacError::internal("mutex poisoned at 0xdeadbeef");
        let (status, code, message) = error.classify();

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(code, ErrCode::InternalServerError);
        assert!(!message.contains("deadbeef"));
    }

    #[actix_web::test]
    async fn test_error_response_body() {
        let error = RbacError::validation("miss parameter[uid]");
        let response = error.error_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body = actix_web::body::to_bytes(response.into_body()).await.unwrap();
        let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(json["code"], 2);
        assert!(json["message"].as_str().unwrap().contains("miss parameter[uid]"));
    }
}
