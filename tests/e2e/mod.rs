//! End-to-end tests against a live Redis server
//!
//! Ignored by default. Point `REDIS_URL` at a disposable instance and run
//! with `--ignored`; every test works in its own namespace on database 15.

pub mod redis_cache_tests;
