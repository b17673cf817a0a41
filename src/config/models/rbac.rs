//! Top-level service configuration

#![allow(missing_docs)]

use super::*;
use serde::{Deserialize, Serialize};

/// Service configuration as laid out in the YAML file
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct RbacConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub cache: CacheConfig,
    #[serde(default)]
    pub log: LogConfig,
}

impl RbacConfig {
    /// Merge two configurations, with other taking precedence
    pub fn merge(mut self, other: Self) -> Self {
        self.server = self.server.merge(other.server);
        self.storage = self.storage.merge(other.storage);
        self.cache = self.cache.merge(other.cache);
        self.log = self.log.merge(other.log);
        self
    }
}
