//! Common test utilities for rbac-rs
//!
//! - In-memory SQLite store with migrations applied
//! - `TestRbac`: facade over that store and an in-memory cache
//! - Fixtures for the Cowshed scenario

pub mod database;
pub mod fixtures;

pub use database::{TestDatabase, TestRbac};

/// Skip test if environment variable is not set
#[macro_export]
macro_rules! skip_without_env {
    ($var:expr) => {
        if std::env::var($var).is_err() {
            eprintln!("Skipping test: {} environment variable not set", $var);
            return;
        }
    };
}
