//! Authorization resolution.
//!
//! Effective access is never stored; it is computed at read time by matching a
//! user's Discord role IDs against the privileged role records. Whitelist
//! slots sum across matched roles, active weekdays and permissions union.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::privileged_role::PrivilegedRoleRepository,
    error::AppError,
    model::{access::ResolvedAccess, role::PrivilegedRole, user::DiscordUser},
};

/// Computes a user's effective access from their role memberships.
///
/// Only enabled privileged roles count. Disabled admin group snapshots on a
/// matched role still contribute the role's slots and days, but no
/// permissions.
pub fn resolve(user_role_ids: &[String], privileged_roles: Vec<PrivilegedRole>) -> ResolvedAccess {
    let mut access = ResolvedAccess::default();

    for role in privileged_roles {
        if !role.enabled || !user_role_ids.contains(&role.role_id) {
            continue;
        }

        access.whitelist_slots += role.whitelist_slots;
        access.active_days.extend(role.active_days.iter().copied());

        if let Some(group) = &role.admin_group {
            if group.enabled {
                access.permissions.extend(group.permissions.iter().copied());
            }
        }

        access.valid_roles.push(role);
    }

    access
}

/// Service resolving effective access against the database.
pub struct AccessService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AccessService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves effective access for a user from the stored privileged roles.
    pub async fn resolve_for_user(&self, user: &DiscordUser) -> Result<ResolvedAccess, AppError> {
        let privileged_roles = PrivilegedRoleRepository::new(self.db).get_all().await?;
        Ok(resolve(&user.roles, privileged_roles))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::permission::{Permission, Weekday};
    use crate::server::model::admin_group::AdminGroup;

    fn group(name: &str, permissions: Vec<Permission>, enabled: bool) -> AdminGroup {
        AdminGroup {
            group_name: name.to_string(),
            permissions,
            enabled,
            is_whitelist_group: false,
        }
    }

    fn role(
        role_id: &str,
        slots: u32,
        days: Vec<Weekday>,
        admin_group: Option<AdminGroup>,
        enabled: bool,
    ) -> PrivilegedRole {
        PrivilegedRole {
            role_id: role_id.to_string(),
            role_name: format!("Role {}", role_id),
            admin_group,
            active_days: days,
            whitelist_slots: slots,
            enabled,
        }
    }

    #[test]
    fn sums_slots_and_unions_days_across_matched_roles() {
        let roles = vec![
            role(
                "1",
                2,
                vec![Weekday::Monday, Weekday::Tuesday],
                None,
                true,
            ),
            role(
                "2",
                3,
                vec![Weekday::Tuesday, Weekday::Saturday],
                None,
                true,
            ),
        ];
        let user_roles = vec!["1".to_string(), "2".to_string()];

        let access = resolve(&user_roles, roles);

        assert_eq!(access.whitelist_slots, 5);
        assert_eq!(
            access.active_days.into_iter().collect::<Vec<_>>(),
            vec![Weekday::Monday, Weekday::Tuesday, Weekday::Saturday]
        );
        assert_eq!(access.valid_roles.len(), 2);
    }

    #[test]
    fn unions_permissions_from_group_snapshots() {
        let roles = vec![
            role(
                "1",
                0,
                vec![],
                Some(group("Mods", vec![Permission::Kick, Permission::Ban], true)),
                true,
            ),
            role(
                "2",
                0,
                vec![],
                Some(group("Cams", vec![Permission::Kick, Permission::Cameraman], true)),
                true,
            ),
        ];
        let user_roles = vec!["1".to_string(), "2".to_string()];

        let access = resolve(&user_roles, roles);

        // BTreeSet iterates in catalog order.
        assert_eq!(
            access.permissions.into_iter().collect::<Vec<_>>(),
            vec![Permission::Kick, Permission::Ban, Permission::Cameraman]
        );
    }

    #[test]
    fn disabled_role_contributes_nothing() {
        let roles = vec![role(
            "1",
            5,
            vec![Weekday::Sunday],
            Some(group("Mods", vec![Permission::Kick], true)),
            false,
        )];
        let user_roles = vec!["1".to_string()];

        let access = resolve(&user_roles, roles);

        assert_eq!(access.whitelist_slots, 0);
        assert!(access.active_days.is_empty());
        assert!(access.permissions.is_empty());
        assert!(access.valid_roles.is_empty());
    }

    #[test]
    fn disabled_role_excluded_when_mixed_with_enabled_roles() {
        let roles = vec![
            role(
                "R1",
                2,
                vec![Weekday::Monday, Weekday::Wednesday],
                None,
                true,
            ),
            role(
                "R2",
                3,
                vec![Weekday::Wednesday],
                Some(group("Mods", vec![Permission::Kick], true)),
                false,
            ),
        ];
        let user_roles = vec!["R1".to_string(), "R2".to_string()];

        let access = resolve(&user_roles, roles);

        assert_eq!(access.whitelist_slots, 2);
        assert_eq!(
            access.active_days.into_iter().collect::<Vec<_>>(),
            vec![Weekday::Monday, Weekday::Wednesday]
        );
        assert!(access.permissions.is_empty());
        assert_eq!(access.valid_roles.len(), 1);
        assert_eq!(access.valid_roles[0].role_id, "R1");
    }

    #[test]
    fn disabled_group_still_contributes_slots_and_days() {
        let roles = vec![role(
            "1",
            4,
            vec![Weekday::Friday],
            Some(group("Mods", vec![Permission::Kick], false)),
            true,
        )];
        let user_roles = vec!["1".to_string()];

        let access = resolve(&user_roles, roles);

        assert_eq!(access.whitelist_slots, 4);
        assert!(access.active_days.contains(&Weekday::Friday));
        assert!(access.permissions.is_empty());
        assert_eq!(access.valid_roles.len(), 1);
    }

    #[test]
    fn unmatched_roles_are_ignored() {
        let roles = vec![role("1", 2, vec![Weekday::Monday], None, true)];
        let user_roles = vec!["999".to_string()];

        let access = resolve(&user_roles, roles);

        assert_eq!(access, ResolvedAccess::default());
    }

    #[test]
    fn duplicate_permission_appears_once() {
        let roles = vec![
            role(
                "1",
                0,
                vec![],
                Some(group("A", vec![Permission::Reserve], true)),
                true,
            ),
            role(
                "2",
                0,
                vec![],
                Some(group("B", vec![Permission::Reserve], true)),
                true,
            ),
        ];
        let user_roles = vec!["1".to_string(), "2".to_string()];

        let access = resolve(&user_roles, roles);

        assert_eq!(access.permissions.len(), 1);
    }

    #[test]
    fn result_is_order_independent() {
        let make_roles = || {
            vec![
                role(
                    "1",
                    1,
                    vec![Weekday::Monday],
                    Some(group("A", vec![Permission::Kick], true)),
                    true,
                ),
                role(
                    "2",
                    2,
                    vec![Weekday::Friday],
                    Some(group("B", vec![Permission::Ban], true)),
                    true,
                ),
            ]
        };
        let user_roles = vec!["2".to_string(), "1".to_string()];

        let forward = resolve(&user_roles, make_roles());
        let reversed = resolve(&user_roles, make_roles().into_iter().rev().collect());

        assert_eq!(forward.whitelist_slots, reversed.whitelist_slots);
        assert_eq!(forward.active_days, reversed.active_days);
        assert_eq!(forward.permissions, reversed.permissions);
    }
}
