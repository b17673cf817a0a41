//! Helper functions for creating and classifying errors

use super::types::RbacError;

/// Helper functions for creating specific errors
impl RbacError {
    pub fn config<S: Into<String>>(message: S) -> Self {
        Self::Config(message.into())
    }

    pub fn not_found<S: Into<String>>(message: S) -> Self {
        Self::NotFound(message.into())
    }

    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation(message.into())
    }

    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict(message.into())
    }

    pub fn unavailable<S: Into<String>>(message: S) -> Self {
        Self::Unavailable(message.into())
    }

    pub fn internal<S: Into<String>>(message: S) -> Self {
        Self::Internal(message.into())
    }
}

impl RbacError {
    /// True when the referenced record does not exist
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
            || matches!(self, Self::Database(sea_orm::DbErr::RecordNotFound(_)))
    }

    /// True for transport or connection failures of either backing store
    pub fn is_store_unavailable(&self) -> bool {
        match self {
            Self::Database(err) => !matches!(err, sea_orm::DbErr::RecordNotFound(_)),
            Self::Redis(_) | Self::Unavailable(_) => true,
            _ => false,
        }
    }

    /// True for malformed input rejected before reaching any store
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
