//! Test fixtures
//!
//! Seeds the Cowshed system used across the integration tests:
//! roles `common = {read, write}` and `admin = {read, write, manage}`, and
//! user `uid_common` holding `common`.

use rbac_rs::Rbac;
use uuid::Uuid;

pub const SYSTEM: &str = "Cowshed";
pub const COMMON_UID: &str = "uid_common";

/// Register the Cowshed permissions, roles and user
pub async fn seed_cowshed(rbac: &Rbac) {
    for (name, desc) in [
        ("read", "read the herd book"),
        ("write", "edit the herd book"),
        ("manage", "manage the cowshed"),
    ] {
        rbac.register_permission(SYSTEM, name, desc)
            .await
            .expect("register permission");
    }

    rbac.register_role(SYSTEM, "common", "regular staff", &["read", "write"])
        .await
        .expect("register common role");
    rbac.register_role(SYSTEM, "admin", "administrators", &["read", "write", "manage"])
        .await
        .expect("register admin role");

    rbac.register_user(SYSTEM, COMMON_UID, &["common"])
        .await
        .expect("register user");
}

/// A fresh uid that no test has registered
pub fn unique_uid() -> String {
    format!("uid_{}", &Uuid::new_v4().simple().to_string()[..8])
}
