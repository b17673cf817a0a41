//! Effective-permission resolution
//!
//! effective = (whitelist ∪ permissions of every held role) \ blacklist

use crate::core::models::{NameSet, UserPermModel};
use crate::core::traits::PermissionSource;
use crate::utils::error::Result;
use futures::future::join_all;
use tracing::{debug, warn};

/// Combine a user's lists with the permission sets of the roles it holds
///
/// The blacklist is applied last, so a name in both lists is denied.
pub fn effective_permissions<'a, I>(user: &UserPermModel, role_permissions: I) -> NameSet
where
    I: IntoIterator<Item = &'a NameSet>,
{
    let mut effective = user.whitelist.clone();
    for permissions in role_permissions {
        effective.extend(permissions.iter().cloned());
    }
    effective.retain(|name| !user.blacklist.contains(name));
    effective
}

/// Resolve the effective set of an already loaded user
///
/// Roles that no longer exist are skipped. Store failures propagate.
pub async fn resolve<S>(source: &S, user: &UserPermModel) -> Result<NameSet>
where
    S: PermissionSource + ?Sized,
{
    let lookups = user.roles.iter().map(|role| async move {
        (role, source.get_role_permissions(&user.system, role).await)
    });

    let mut role_sets = Vec::with_capacity(user.roles.len());
    for (role, lookup) in join_all(lookups).await {
        match lookup {
            Ok(permissions) => role_sets.push(permissions),
            Err(e) if e.is_not_found() => {
                warn!(
                    system = %user.system,
                    uid = %user.uid,
                    role = %role,
                    "Skipping unresolvable role"
                );
            }
            Err(e) => return Err(e),
        }
    }

    let effective = effective_permissions(user, &role_sets);
    debug!(
        system = %user.system,
        uid = %user.uid,
        roles = role_sets.len(),
        permissions = effective.len(),
        "Resolved effective permissions"
    );
    Ok(effective)
}

/// Load a user from the store and resolve its effective set
///
/// Fails with `NotFound` when the user itself is absent.
pub async fn resolve_user<S>(source: &S, system: &str, uid: &str) -> Result<NameSet>
where
    S: PermissionSource + ?Sized,
{
    let user = source.get_user(system, uid).await?;
    resolve(source, &user).await
}
