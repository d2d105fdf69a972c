//! Resolved authorization state for a user.

use std::collections::BTreeSet;

use crate::{
    model::permission::{Permission, Weekday},
    server::model::{admin_group::AdminGroup, role::PrivilegedRole},
};

/// Effective access computed from a user's Discord role memberships.
///
/// Built by matching the user's role IDs against all privileged role records;
/// see `service::authorization`. Sums and unions are order-independent, so the
/// result never depends on the order roles are read from the database.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ResolvedAccess {
    /// Enabled privileged roles the user holds, in storage order.
    pub valid_roles: Vec<PrivilegedRole>,
    /// Total whitelist slots, summed across valid roles.
    pub whitelist_slots: u32,
    /// Union of active weekdays across valid roles.
    pub active_days: BTreeSet<Weekday>,
    /// Union of permissions from enabled admin groups on valid roles.
    pub permissions: BTreeSet<Permission>,
}

impl ResolvedAccess {
    /// The enabled admin group snapshots attached to the user's valid roles.
    pub fn groups(&self) -> impl Iterator<Item = &AdminGroup> {
        self.valid_roles
            .iter()
            .filter_map(|role| role.admin_group.as_ref())
            .filter(|group| group.enabled)
    }

    /// Whether one of the user's resolved groups is the distinguished
    /// whitelist group.
    pub fn has_whitelist_group(&self) -> bool {
        self.groups().any(|group| group.is_whitelist_group)
    }

    /// Whether the resolved group set contains a group with this name.
    pub fn has_group_named(&self, group_name: &str) -> bool {
        self.groups().any(|group| group.group_name == group_name)
    }
}
