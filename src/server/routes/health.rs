//! Health check and status endpoints

use crate::core::permission_cache::CacheStats;
use crate::server::routes::ApiResponse;
use crate::server::state::AppState;
use crate::storage::StorageHealthStatus;
use crate::utils::error::ErrCode;
use actix_web::{HttpResponse, web};
use serde::Serialize;
use std::borrow::Cow;
use tracing::{debug, warn};

/// Configure health check routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/version", web::get().to(version_info));
}

#[derive(Debug, Clone, Serialize)]
struct HealthStatus {
    status: Cow<'static, str>,
    timestamp: chrono::DateTime<chrono::Utc>,
    version: Cow<'static, str>,
    storage: StorageHealthStatus,
    cache_stats: CacheStats,
    hit_rate: f64,
}

#[derive(Debug, Clone, Serialize)]
struct VersionInfo {
    version: Cow<'static, str>,
    build_time: Cow<'static, str>,
    git_hash: Cow<'static, str>,
    rust_version: Cow<'static, str>,
}

/// Storage health plus permission cache counters
///
/// Answers 503 when either store is unreachable.
async fn health_check(state: web::Data<AppState>) -> HttpResponse {
    debug!("Health check requested");

    let storage = state.rbac.health_check().await;
    let cache_stats = state.rbac.cache_stats();
    let healthy = storage.overall;

    let body = ApiResponse {
        code: if healthy {
            ErrCode::Ok
        } else {
            ErrCode::InternalServerError
        },
        message: Cow::Borrowed(if healthy { "success" } else { "degraded" }),
        data: Some(HealthStatus {
            status: Cow::Borrowed(if healthy { "healthy" } else { "degraded" }),
            timestamp: chrono::Utc::now(),
            version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
            hit_rate: cache_stats.hit_rate(),
            storage,
            cache_stats,
        }),
    };

    if healthy {
        HttpResponse::Ok().json(body)
    } else {
        warn!("Health check reports degraded storage");
        HttpResponse::ServiceUnavailable().json(body)
    }
}

/// Version and build information
async fn version_info() -> HttpResponse {
    let info = VersionInfo {
        version: Cow::Borrowed(env!("CARGO_PKG_VERSION")),
        build_time: Cow::Borrowed(env!("BUILD_TIME")),
        git_hash: Cow::Borrowed(env!("GIT_HASH")),
        rust_version: Cow::Borrowed(env!("RUST_VERSION")),
    };

    ApiResponse::with_data(info).to_http_response()
}
