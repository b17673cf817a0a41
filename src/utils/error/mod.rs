//! Error Handling utilities
//!
//! This module provides the error taxonomy and retry support for the store clients.

pub mod error;
pub mod recovery;

// Re-export commonly used types and functions
pub use error::*;
pub use recovery::*;
