//! Server builder and run_server function

use crate::config::Config;
use crate::rbac::Rbac;
use crate::server::server::HttpServer;
use crate::storage::database::DatabaseBackendType;
use crate::utils::error::{RbacError, Result};
use tracing::info;

/// Server builder for easier configuration
#[derive(Default)]
pub struct ServerBuilder {
    config: Option<Config>,
    rbac: Option<Rbac>,
}

impl ServerBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = Some(config);
        self
    }

    /// Serve an already connected facade instead of connecting from config
    pub fn with_rbac(mut self, rbac: Rbac) -> Self {
        self.rbac = Some(rbac);
        self
    }

    /// Build the HTTP server
    pub async fn build(self) -> Result<HttpServer> {
        let config = self
            .config
            .ok_or_else(|| RbacError::config("Configuration is required"))?;

        match self.rbac {
            Some(rbac) => Ok(HttpServer::with_rbac(config, rbac)),
            None => HttpServer::new(&config).await,
        }
    }
}

/// Connect the stores and serve until shutdown
pub async fn run_server(config: Config) -> Result<()> {
    info!(
        "Starting RBAC server at http://{}:{}",
        config.server().host,
        config.server().port
    );
    info!(
        database = ?DatabaseBackendType::from_url(&config.storage().database.url),
        redis = %config.storage().redis.masked_url(),
        cache = ?config.cache().backend,
        namespace = %config.cache().namespace,
        "Storage configuration"
    );

    let server = ServerBuilder::new().with_config(config).build().await?;
    server.start().await
}
