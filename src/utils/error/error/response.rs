//! HTTP response handling for errors

use super::types::RbacError;
use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use serde::Serialize;

/// Result codes carried in every response envelope
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ErrCode {
    Ok = 0,
    NotFound = 1,
    BadParams = 2,
    InternalServerError = 3,
}

impl Serialize for ErrCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(*self as u8)
    }
}

/// Error envelope `{"code": .., "message": ..}`
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub code: ErrCode,
    pub message: String,
}

impl RbacError {
    /// Status, envelope code and client-facing message for this error
    pub fn classify(&self) -> (StatusCode, ErrCode, String) {
        match self {
            RbacError::NotFound(_) => (StatusCode::OK, ErrCode::NotFound, self.to_string()),
            RbacError::Database(sea_orm::DbErr::RecordNotFound(_)) => {
                (StatusCode::OK, ErrCode::NotFound, self.to_string())
            }
            RbacError::Validation(_) => {
                (StatusCode::BAD_REQUEST, ErrCode::BadParams, self.to_string())
            }
            RbacError::Conflict(_) => (StatusCode::CONFLICT, ErrCode::BadParams, self.to_string()),
            RbacError::Database(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrCode::InternalServerError,
                "Database operation failed".to_string(),
            ),
            RbacError::Redis(_) | RbacError::Unavailable(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                ErrCode::InternalServerError,
                "Cache operation failed".to_string(),
            ),
            _ => (
                StatusCode::INTERNAL_SERVER_ERROR,
                ErrCode::InternalServerError,
                "An internal error occurred".to_string(),
            ),
        }
    }
}

impl ResponseError for RbacError {
    fn status_code(&self) -> StatusCode {
        self.classify().0
    }

    fn error_response(&self) -> HttpResponse {
        let (status_code, code, message) = self.classify();
        HttpResponse::build(status_code).json(ErrorResponse { code, message })
    }
}
