//! Error handling for the RBAC service
//!
//! This module defines all error types used throughout the service.

#![allow(missing_docs)]

mod helpers;
mod response;
mod types;

pub use response::{ErrCode, ErrorResponse};
pub use types::{RbacError, Result};
