//! Domain records shared by the resolver, the store adapter and the facade

mod name_set;
mod rbac;

pub use name_set::NameSet;
pub use rbac::{Permission, Role, UserPermModel};
