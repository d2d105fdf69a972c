use crate::{
    model::permission::{Permission, Weekday},
    server::{
        data::privileged_role::PrivilegedRoleRepository,
        error::AppError,
        model::{admin_group::AdminGroup, role::UpsertPrivilegedRoleParam},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_role_id;
mod get_all;
mod update;

fn moderator_group() -> AdminGroup {
    AdminGroup {
        group_name: "Moderators".to_string(),
        permissions: vec![Permission::Kick, Permission::Ban],
        enabled: true,
        is_whitelist_group: false,
    }
}
