//! Permit check endpoint

use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::utils::error::RbacError;
use actix_web::{HttpResponse, web};
use serde::{Deserialize, Serialize};

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/authenticate", web::get().to(authenticate));
}

/// `GET /authenticate?system=..&uid=..&permission=..`
#[derive(Debug, Deserialize)]
pub struct PermitQuery {
    #[serde(default)]
    pub system: String,
    #[serde(default)]
    pub uid: String,
    #[serde(default)]
    pub permission: String,
}

#[derive(Debug, Serialize)]
struct Permit {
    permit: bool,
}

/// Whether the user holds the permission; unknown users answer `false`
async fn authenticate(
    state: web::Data<AppState>,
    query: web::Query<PermitQuery>,
) -> Result<HttpResponse, RbacError> {
    let permit = state
        .rbac
        .is_permitted(&query.system, &query.uid, &query.permission)
        .await?;

    Ok(ApiResponse::with_data(Permit { permit }).to_http_response())
}
