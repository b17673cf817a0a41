//! Configuration validation
//!
//! - `trait_def`: Core Validate trait definition
//! - `config_validators`: server, cache and log validators
//! - `storage_validators`: durable store and Redis validators

mod config_validators;
mod storage_validators;
#[cfg(test)]
mod tests;
mod trait_def;

pub use trait_def::Validate;
