// Module declarations
mod connection;
mod permission_ops;
mod role_ops;
mod source;
mod types;
mod user_ops;

// Re-export public types
pub use types::{DatabaseBackendType, DatabaseStats, SeaOrmDatabase};

use crate::utils::error::RbacError;
use sea_orm::{DbErr, SqlErr};

/// Map a unique-index violation to `Conflict`, anything else to `Database`
pub(super) fn unique_violation(err: DbErr, what: String) -> RbacError {
    match err.sql_err() {
        Some(SqlErr::UniqueConstraintViolation(_)) => {
            RbacError::conflict(format!("{} already exists", what))
        }
        _ => RbacError::Database(err),
    }
}
