//! Integration tests for rbac-rs
//!
//! These tests drive the facade, the cache manager and the durable store
//! together against in-memory backends.

pub mod cache_consistency_tests;
pub mod config_validation_tests;
pub mod database_tests;
pub mod error_handling_tests;
pub mod rbac_tests;
