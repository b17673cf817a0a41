/// Permission entity module
pub mod permission;
/// Role entity module
pub mod role;
/// User permission model entity module
pub mod user_perm_model;

pub use permission::Entity as Permission;
pub use role::Entity as Role;
pub use user_perm_model::Entity as UserPermModel;
