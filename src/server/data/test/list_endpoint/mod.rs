use crate::{
    model::permission::Permission,
    server::{
        data::list_endpoint::ListEndpointRepository,
        error::AppError,
        model::{admin_group::AdminGroup, list::UpsertListEndpointParam},
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name;
mod update;

fn whitelist_group() -> AdminGroup {
    AdminGroup {
        group_name: "Whitelist".to_string(),
        permissions: vec![Permission::Reserve],
        enabled: true,
        is_whitelist_group: true,
    }
}
