//! HTTP route modules
//!
//! Every endpoint answers with the envelope `{"code": .., "message": .., ...}`.
//! Failures are rendered by the `ResponseError` impl of `RbacError`.

pub mod authenticate;
pub mod health;
pub mod permission;
pub mod role;
pub mod user;

use crate::utils::error::{ErrCode, RbacError};
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use std::borrow::Cow;

/// Standard API response envelope
#[derive(Debug, Clone, Serialize)]
pub struct ApiResponse<T> {
    /// Result code, 0 on success
    pub code: ErrCode,
    pub message: Cow<'static, str>,
    /// Payload fields, inlined next to `code` and `message`
    #[serde(flatten)]
    pub data: Option<T>,
}

/// Placeholder payload for responses without data
#[derive(Debug, Clone, Copy, Serialize)]
pub struct Empty {}

impl ApiResponse<Empty> {
    /// Successful response without payload
    pub fn success() -> Self {
        Self {
            code: ErrCode::Ok,
            message: Cow::Borrowed("success"),
            data: None,
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    /// Successful response carrying `data`
    pub fn with_data(data: T) -> Self {
        Self {
            code: ErrCode::Ok,
            message: Cow::Borrowed("success"),
            data: Some(data),
        }
    }

    pub fn to_http_response(&self) -> HttpResponse {
        HttpResponse::Ok().json(self)
    }
}

/// `system` + `uid`, as query parameters or request body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserRef {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub uid: String,
}

/// Register every RBAC route
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config())
        .app_data(query_config())
        .configure(authenticate::configure_routes)
        .configure(permission::configure_routes)
        .configure(role::configure_routes)
        .configure(user::configure_routes)
        .configure(health::configure_routes);
}

/// Malformed JSON bodies answer with the bad-params envelope
fn json_config() -> web::JsonConfig {
    web::JsonConfig::default()
        .error_handler(|err, _req| RbacError::validation(err.to_string()).into())
}

fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| RbacError::validation(err.to_string()).into())
}
