//! Application state shared across HTTP handlers

use crate::config::Config;
use crate::rbac::Rbac;
use std::sync::Arc;

/// HTTP server state shared across handlers
///
/// Cloned into every worker; all fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Service configuration (shared read-only)
    pub config: Arc<Config>,
    /// RBAC facade
    pub rbac: Arc<Rbac>,
}

impl AppState {
    pub fn new(config: Config, rbac: Rbac) -> Self {
        Self {
            config: Arc::new(config),
            rbac: Arc::new(rbac),
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }
}
