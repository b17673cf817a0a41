//! Error recovery utilities
//!
//! Retry with backoff for transport failures of the backing stores.

mod retry;
mod types;

pub use retry::RetryPolicy;
pub use types::RetryConfig;

#[cfg(test)]
mod tests;
