use crate::{
    model::permission::Permission,
    server::{
        data::admin_group::AdminGroupRepository, error::AppError,
        model::admin_group::UpsertAdminGroupParam,
    },
};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod find_by_name;
mod find_whitelist_group;
mod get_all;
mod update;
