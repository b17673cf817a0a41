//! Management facade
//!
//! CRUD for permissions, roles and user models on the durable store, with the
//! cache invalidation each write requires, plus the permit check itself.

mod manager;
mod permission_ops;
mod role_ops;
mod user_ops;
mod validation;

pub use manager::Rbac;
