//! User model endpoints
//!
//! Covers registration, role assignment, both permission lists and the cached
//! effective set of a single user.

use crate::core::models::{NameSet, UserPermModel};
use crate::server::routes::{ApiResponse, UserRef};
use crate::server::state::AppState;
use crate::utils::error::RbacError;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/user")
            .route(web::post().to(register_user))
            .route(web::delete().to(unregister_user))
            .route(web::put().to(update_user))
            .route(web::get().to(get_user)),
    )
    .service(
        web::resource("/user/roles")
            .route(web::get().to(user_roles))
            .route(web::put().to(update_roles)),
    )
    .route("/user/roles/add", web::put().to(add_roles))
    .route("/user/roles/remove", web::put().to(remove_role))
    .route("/user/blacklist", web::get().to(get_blacklist))
    .route("/user/blacklist/add", web::put().to(add_to_blacklist))
    .route("/user/blacklist/remove", web::put().to(remove_from_blacklist))
    .route("/user/blacklist/clear", web::put().to(clear_blacklist))
    .service(
        web::resource("/user/whitelist")
            .route(web::get().to(get_whitelist))
            .route(web::put().to(update_whitelist)),
    )
    .route("/user/whitelist/add", web::put().to(add_to_whitelist))
    .route("/user/whitelist/remove", web::put().to(remove_from_whitelist))
    .route("/user/whitelist/clear", web::put().to(clear_whitelist))
    .route("/user/permissions", web::get().to(cached_permissions))
    .route("/user/reload", web::put().to(reload_user));
}

/// Body of `POST /user` and `PUT /user/roles`
#[derive(Debug, Deserialize)]
pub struct UserRolesBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub roles: Vec<String>,
}

/// Body of `PUT /user`; the model is replaced and both lists reset
#[derive(Debug, Deserialize)]
pub struct UpdateUserBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub new_roles: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct RemoveRoleBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub role: String,
}

/// Body of the `add` list endpoints
#[derive(Debug, Deserialize)]
pub struct PermissionsBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub permissions: Vec<String>,
}

/// Body of the `remove` list endpoints
#[derive(Debug, Deserialize)]
pub struct PermissionBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub permission: String,
}

/// Body of `PUT /user/whitelist`
#[derive(Debug, Deserialize)]
pub struct WhitelistBody {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub whitelist: Vec<String>,
}

#[derive(Debug, Serialize)]
struct UserData {
    user: UserPermModel,
}

#[derive(Debug, Serialize)]
struct Roles {
    roles: NameSet,
}

#[derive(Debug, Serialize)]
struct Blacklist {
    blacklist: NameSet,
}

#[derive(Debug, Serialize)]
struct Whitelist {
    whitelist: NameSet,
}

#[derive(Debug, Serialize)]
struct Cached {
    cached: bool,
    permissions: BTreeSet<String>,
}

#[derive(Debug, Serialize)]
struct Reloaded {
    permissions: NameSet,
}

fn done() -> HttpResponse {
    ApiResponse::success().to_http_response()
}

async fn register_user(
    state: web::Data<AppState>,
    body: web::Json<UserRolesBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .register_user(&body.system, &body.uid, &body.roles)
        .await?;
    Ok(done())
}

async fn unregister_user(
    state: web::Data<AppState>,
    body: web::Json<UserRef>,
) -> Result<HttpResponse, RbacError> {
    state.rbac.unregister_user(&body.system, &body.uid).await?;
    Ok(done())
}

async fn update_user(
    state: web::Data<AppState>,
    body: web::Json<UpdateUserBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .update_user(&body.system, &body.uid, &body.new_roles)
        .await?;
    Ok(done())
}

async fn get_user(
    state: web::Data<AppState>,
    query: web::Query<UserRef>,
) -> Result<HttpResponse, RbacError> {
    let user = state.rbac.user(&query.system, &query.uid).await?;
    Ok(ApiResponse::with_data(UserData { user }).to_http_response())
}

async fn user_roles(
    state: web::Data<AppState>,
    query: web::Query<UserRef>,
) -> Result<HttpResponse, RbacError> {
    let roles = state.rbac.roles_of_user(&query.system, &query.uid).await?;
    Ok(ApiResponse::with_data(Roles { roles }).to_http_response())
}

async fn update_roles(
    state: web::Data<AppState>,
    body: web::Json<UserRolesBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .update_roles(&body.system, &body.uid, &body.roles)
        .await?;
    Ok(done())
}

async fn add_roles(
    state: web::Data<AppState>,
    body: web::Json<UserRolesBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .add_roles(&body.system, &body.uid, &body.roles)
        .await?;
    Ok(done())
}

async fn remove_role(
    state: web::Data<AppState>,
    body: web::Json<RemoveRoleBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .remove_role(&body.system, &body.uid, &body.role)
        .await?;
    Ok(done())
}

async fn get_blacklist(
    state: web::Data<AppState>,
    query: web::Query<UserRef>,
) -> Result<HttpResponse, RbacError> {
    let blacklist = state.rbac.blacklist(&query.system, &query.uid).await?;
    Ok(ApiResponse::with_data(Blacklist { blacklist }).to_http_response())
}

async fn add_to_blacklist(
    state: web::Data<AppState>,
    body: web::Json<PermissionsBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .add_to_blacklist(&body.system, &body.uid, &body.permissions)
        .await?;
    Ok(done())
}

async fn remove_from_blacklist(
    state: web::Data<AppState>,
    body: web::Json<PermissionBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .remove_from_blacklist(&body.system, &body.uid, &body.permission)
        .await?;
    Ok(done())
}

async fn clear_blacklist(
    state: web::Data<AppState>,
    body: web::Json<UserRef>,
) -> Result<HttpResponse, RbacError> {
    state.rbac.clear_blacklist(&body.system, &body.uid).await?;
    Ok(done())
}

async fn get_whitelist(
    state: web::Data<AppState>,
    query: web::Query<UserRef>,
) -> Result<HttpResponse, RbacError> {
    let whitelist = state.rbac.whitelist(&query.system, &query.uid).await?;
    Ok(ApiResponse::with_data(Whitelist { whitelist }).to_http_response())
}

async fn update_whitelist(
    state: web::Data<AppState>,
    body: web::Json<WhitelistBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .update_whitelist(&body.system, &body.uid, &body.whitelist)
        .await?;
    Ok(done())
}

async fn add_to_whitelist(
    state: web::Data<AppState>,
    body: web::Json<PermissionsBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .add_to_whitelist(&body.system, &body.uid, &body.permissions)
        .await?;
    Ok(done())
}

async fn remove_from_whitelist(
    state: web::Data<AppState>,
    body: web::Json<PermissionBody>,
) -> Result<HttpResponse, RbacError> {
    state
        .rbac
        .remove_from_whitelist(&body.system, &body.uid, &body.permission)
        .await?;
    Ok(done())
}

async fn clear_whitelist(
    state: web::Data<AppState>,
    body: web::Json<UserRef>,
) -> Result<HttpResponse, RbacError> {
    state.rbac.clear_whitelist(&body.system, &body.uid).await?;
    Ok(done())
}

/// Current cache entry; `cached: false` when the user is not resolved yet
async fn cached_permissions(
    state: web::Data<AppState>,
    query: web::Query<UserRef>,
) -> Result<HttpResponse, RbacError> {
    let entry = state
        .rbac
        .cached_permissions(&query.system, &query.uid)
        .await?;

    let data = Cached {
        cached: entry.is_some(),
        permissions: entry.unwrap_or_default(),
    };
    Ok(ApiResponse::with_data(data).to_http_response())
}

async fn reload_user(
    state: web::Data<AppState>,
    body: web::Json<UserRef>,
) -> Result<HttpResponse, RbacError> {
    let permissions = state.rbac.reload(&body.system, &body.uid).await?;
    Ok(ApiResponse::with_data(Reloaded { permissions }).to_http_response())
}
