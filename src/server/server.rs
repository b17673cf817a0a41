//! HTTP server core implementation

use crate::config::{Config, ServerConfig};
use crate::rbac::Rbac;
use crate::server::routes;
use crate::server::state::AppState;
use crate::utils::error::{RbacError, Result};
use actix_web::{
    App, HttpServer as ActixHttpServer,
    middleware::{DefaultHeaders, Logger},
    web,
};
use std::time::Duration;
use tracing::{info, warn};

/// HTTP server
pub struct HttpServer {
    /// Server configuration
    config: ServerConfig,
    /// Application state
    state: AppState,
}

impl HttpServer {
    /// Connect the stores and create a server for `config`
    pub async fn new(config: &Config) -> Result<Self> {
        info!("Creating HTTP server");

        let rbac = Rbac::connect(config).await?;
        Ok(Self::with_rbac(config.clone(), rbac))
    }

    /// Create a server around an already connected facade
    pub fn with_rbac(config: Config, rbac: Rbac) -> Self {
        Self {
            config: config.server().clone(),
            state: AppState::new(config, rbac),
        }
    }

    /// Create the Actix-web application
    pub fn create_app(
        state: web::Data<AppState>,
    ) -> App<
        impl actix_web::dev::ServiceFactory<
            actix_web::dev::ServiceRequest,
            Config = (),
            Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
            Error = actix_web::Error,
            InitError = (),
        >,
    > {
        App::new()
            .app_data(state)
            .wrap(Logger::default())
            .wrap(DefaultHeaders::new().add(("Server", "rbac-rs")))
            .configure(routes::configure_routes)
    }

    /// Start the HTTP server and block until it stops
    pub async fn start(self) -> Result<()> {
        let bind_addr = self.config.address();
        info!("Starting HTTP server on {}", bind_addr);

        let rbac = self.state.rbac.clone();
        let state = web::Data::new(self.state);

        let mut server = ActixHttpServer::new(move || Self::create_app(state.clone()))
            .client_request_timeout(Duration::from_secs(self.config.timeout));
        if let Some(workers) = self.config.workers {
            server = server.workers(workers);
        }

        let server = server
            .bind(&bind_addr)
            .map_err(|e| Self::format_bind_error(e, &bind_addr))?
            .run();

        info!("HTTP server listening on {}", bind_addr);

        server
            .await
            .map_err(|e| RbacError::internal(format!("Server error: {}", e)))?;

        info!("HTTP server stopped");
        if let Err(e) = rbac.close().await {
            warn!("Failed to close storage connections: {}", e);
        }
        Ok(())
    }

    fn format_bind_error(error: std::io::Error, addr: &str) -> RbacError {
        match error.kind() {
            std::io::ErrorKind::AddrInUse => {
                RbacError::config(format!("Address {} is already in use", addr))
            }
            std::io::ErrorKind::PermissionDenied => {
                RbacError::config(format!("Permission denied binding to {}", addr))
            }
            _ => RbacError::Io(error),
        }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }
}
