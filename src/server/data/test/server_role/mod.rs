use crate::server::{data::server_role::ServerRoleRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod delete;
mod delete_missing;
mod upsert;
