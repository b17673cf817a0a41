//! Role endpoints
//!
//! Writes that change a role's grants flush the permission cache.

use crate::core::models::{NameSet, Role};
use crate::server::routes::ApiResponse;
use crate::server::routes::permission::{RenameBody, SystemRef};
use crate::server::state::AppState;
use crate::utils::error::RbacError;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/role")
            .route(web::post().to(register_role))
            .route(web::delete().to(unregister_role))
            .route(web::get().to(get_role))
            .route(web::put().to(update_role_name)),
    )
    .service(
        web::resource("/role/all")
            .route(web::get().to(list_roles))
            .route(web::delete().to(unregister_all_roles)),
    )
    .route("/role/permissions", web::get().to(role_permissions))
    .route("/role/permissions/grant", web::put().to(grant_permissions))
    .route("/role/permissions/remove", web::put().to(remove_permission));
}

/// Body of `POST /role`
#[derive(Debug, Deserialize)]
pub struct RoleBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, alias = "description")]
    pub desc: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Body of `DELETE /role`
#[derive(Debug, Deserialize)]
pub struct RoleRef {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct RoleQuery {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub role: String,
}

/// Body of `PUT /role/permissions/grant`
#[derive(Debug, Deserialize)]
pub struct GrantBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Body of `PUT /role/permissions/remove`
#[derive(Debug, Deserialize)]
pub struct RevokeBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub role: String,
    #[serde(default)]
    pub permission: String,
}

#[derive(Debug, Serialize)]
struct RoleData {
    role: Role,
}

#[derive(Debug, Serialize)]
struct Roles {
    roles: Vec<Role>,
}

#[derive(Debug, Serialize)]
struct RolePermissions {
    permissions: NameSet,
}

#[derive(Debug, Serialize)]
struct Removed {
    removed: u64,
}

async fn register_role(
    state: web::Data<AppState>,
    body: web::Json<RoleBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .register_role(&body.system, &body.name, &body.desc, &body.permissions)
        .await?;
    Ok(ApiResponse::success().to_http_response())
}

async fn unregister_role(
    state: web::Data<AppState>,
    body: web::Json<RoleRef>,
) -> Result<HttpResponse, RbacError> {
    state.rbac.unregister_role(&body.system, &body.name).await?;
    Ok(ApiResponse::success().to_http_response())
}

async fn unregister_all_roles(
    state: web::Data<AppState>,
    body: web::Json<SystemRef>,
) -> Result<HttpResponse, RbacError> {
    let removed = state.rbac.unregister_all_roles(&body.system).await?;
    Ok(ApiResponse::with_data(Removed { removed }).to_http_response())
}

async fn get_role(
    state: web::Data<AppState>,
    query: web::Query<RoleQuery>,
) -> Result<HttpResponse, RbacError> {
    let role = state.rbac.role(&query.system, &query.role).await?;
    Ok(ApiResponse::with_data(RoleData { role }).to_http_response())
}

async fn list_roles(
    state: web::Data<AppState>,
    query: web::Query<SystemRef>,
) -> Result<HttpResponse, RbacError> {
    let roles = state.rbac.roles_of_system(&query.system).await?;
    Ok(ApiResponse::with_data(Roles { roles }).to_http_response())
}

async fn update_role_name(
    state: web::Data<AppState>,
    body: web::Json<RenameBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .update_role_name(&body.system, &body.oldname, &body.newname)
        .await?;
    Ok(ApiResponse::success().to_http_response())
}

async fn role_permissions(
    state: web::Data<AppState>,
    query: web::Query<RoleQuery>,
) -> Result<HttpResponse, RbacError> {
    let permissions = state
        .rbac
        .permissions_of_role(&query.system, &query.role)
        .await?;
    Ok(ApiResponse::with_data(RolePermissions { permissions }).to_http_response())
}

async fn grant_permissions(
    state: web::Data<AppState>,
    body: web::Json<GrantBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .grant_permissions_to_role(&body.system, &body.role, &body.permissions)
        .await?;
    Ok(ApiResponse::success().to_http_response())
}

async fn remove_permission(
    state: web::Data<AppState>,
    body: web::Json<RevokeBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .remove_permission_from_role(&body.system, &body.role, &body.permission)
        .await?;
    Ok(ApiResponse::success().to_http_response())
}
