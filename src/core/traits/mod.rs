//! Seams between the permission core and its backing stores

pub mod cache;
pub mod source;

pub use cache::PermissionCache;
pub use source::PermissionSource;
