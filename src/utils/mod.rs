//! Utility modules for the RBAC service
//!
//! - **error**: error taxonomy, HTTP mapping and retry support

pub mod error;

pub use error::{RbacError, Result, RetryConfig, RetryPolicy};
