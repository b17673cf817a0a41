//! Permission cache configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Which store holds the materialized permission sets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum CacheBackend {
    #[default]
    Redis,
    Memory,
}

impl std::str::FromStr for CacheBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "redis" => Ok(Self::Redis),
            "memory" => Ok(Self::Memory),
            other => Err(format!("unknown cache backend: {}", other)),
        }
    }
}

/// Permission cache configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CacheConfig {
    #[serde(default)]
    pub backend: CacheBackend,
    /// Prefix scoping every cache key owned by this service
    #[serde(default = "default_namespace")]
    pub namespace: String,
    /// Coalesce concurrent reloads of the same key
    #[serde(default)]
    pub single_flight: bool,
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            backend: CacheBackend::default(),
            namespace: default_namespace(),
            single_flight: false,
        }
    }
}

impl CacheConfig {
    pub fn merge(mut self, other: Self) -> Self {
        if other.backend != CacheBackend::default() {
            self.backend = other.backend;
        }
        if other.namespace != default_namespace() {
            self.namespace = other.namespace;
        }
        if other.single_flight {
            self.single_flight = true;
        }
        self
    }
}
