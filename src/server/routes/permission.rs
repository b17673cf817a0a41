//! Permission catalogue endpoints

use crate::core::models::Permission;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::RbacError;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use tracing::debug;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/permission")
            .route(web::post().to(register_permission))
            .route(web::delete().to(unregister_permission))
            .route(web::get().to(list_permissions))
            .route(web::put().to(update_permission)),
    );
}

/// Body of `POST` and `DELETE /permission`
#[derive(Debug, Deserialize)]
pub struct PermissionBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "description")]
    pub desc: String,
}

/// `system` alone, as query parameter or request body
#[derive(Debug, Deserialize)]
pub struct SystemRef {
    #[serde(default)]
    pub system: String,
}

/// Body of the rename endpoints
#[derive(Debug, Deserialize)]
pub struct RenameBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub oldname: String,
    #[serde(default)]
    pub newname: String,
}

#[derive(Debug, Serialize)]
struct Permissions {
    permissions: Vec<Permission>,
}

async fn register_permission(
    state: web::Data<AppState>,
    body: web::Json<PermissionBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .register_permission(&body.system, &body.name, &body.desc)
        .await?;
    Ok(ApiResponse::success().to_http_response())
}

async fn unregister_permission(
    state: web::Data<AppState>,
    body: web::Json<PermissionBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .unregister_permission(&body.system, &body.name)
        .await?;
    Ok(ApiResponse::success().to_http_response())
}

async fn list_permissions(
    state: web::Data<AppState>,
    query: web::Query<SystemRef>,
) -> Result<HttpResponse, RbacError> {
    let permissions = state.rbac.permissions_of_system(&query.system).await?;
    debug!("Listing {} permissions of {}", permissions.len(), query.system);

    Ok(ApiResponse::with_data(Permissions { permissions }).to_http_response())
}

async fn update_permission(
    state: web::Data<AppState>,
    body: web::Json<RenameBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .update_permission(&body.system, &body.oldname, &body.newname)
        .await?;
    Ok(ApiResponse::success().to_http_response())
}
