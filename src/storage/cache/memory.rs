//! In-process permission cache
//!
//! Mirrors Redis set semantics: an empty set does not exist as a key.

use crate::core::traits::PermissionCache;
use crate::utils::error::Result;
use async_trait::async_trait;
use dashmap::DashMap;
use std::collections::BTreeSet;

/// Permission cache held in a concurrent map
#[derive(Debug, Default)]
pub struct MemoryPermissionCache {
    entries: DashMap<String, BTreeSet<String>>,
    prefix: String,
}

impl MemoryPermissionCache {
    /// Cache owning every key that starts with `{namespace}:`
    pub fn new(namespace: &str) -> Self {
        Self {
            entries: DashMap::new(),
            prefix: format!("{}:", namespace),
        }
    }

    /// Number of stored keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl PermissionCache for MemoryPermissionCache {
    async fn exists(&self, key: &str) -> Result<bool> {
        Ok(self.entries.contains_key(key))
    }

    async fn is_member(&self, key: &str, member: &str) -> Result<bool> {
        Ok(self
            .entries
            .get(key)
            .is_some_and(|members| members.contains(member)))
    }

    async fn add_members(&self, key: &str, members: &[String]) -> Result<()> {
        if members.is_empty() {
            return Ok(());
        }
        self.entries
            .entry(key.to_string())
            .or_default()
            .extend(members.iter().cloned());
        Ok(())
    }

    async fn remove_members(&self, key: &str, members: &[String]) -> Result<()> {
        if let Some(mut set) = self.entries.get_mut(key) {
            for member in members {
                set.remove(member);
            }
        }
        self.entries.remove_if(key, |_, set| set.is_empty());
        Ok(())
    }

    async fn list_members(&self, key: &str) -> Result<BTreeSet<String>> {
        Ok(self
            .entries
            .get(key)
            .map(|members| members.clone())
            .unwrap_or_default())
    }

    async fn delete(&self, key: &str) -> Result<bool> {
        Ok(self.entries.remove(key).is_some())
    }

    async fn flush_all(&self) -> Result<()> {
        self.entries.retain(|key, _| !key.starts_with(&self.prefix));
        Ok(())
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}
