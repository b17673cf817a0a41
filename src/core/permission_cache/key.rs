//! Cache key encoding
//!
//! `{namespace}:permissions:{len(system)}:{system}:{uid}`
//!
//! The length prefix fixes where `system` ends, so any byte may appear in either
//! identifier without two distinct pairs producing the same key.

/// Builds keys for one cache namespace
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermissionKeys {
    namespace: String,
}

impl PermissionKeys {
    pub fn new(namespace: impl Into<String>) -> Self {
        Self {
            namespace: namespace.into(),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// Key of the resolved permission set of `(system, uid)`
    pub fn user_key(&self, system: &str, uid: &str) -> String {
        format!(
            "{}:permissions:{}:{}:{}",
            self.namespace,
            system.len(),
            system,
            uid
        )
    }

    /// Glob matching every key in the namespace
    pub fn namespace_pattern(&self) -> String {
        format!("{}:*", self.namespace)
    }

    /// Prefix shared by every key in the namespace
    pub fn namespace_prefix(&self) -> String {
        format!("{}:", self.namespace)
    }
}

impl Default for PermissionKeys {
    fn default() -> Self {
        Self::new("rbac")
    }
}
