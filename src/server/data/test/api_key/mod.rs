use crate::server::{data::api_key::ApiKeyRepository, error::AppError};
use test_utils::{builder::TestBuilder, factory};

mod create;
mod delete;
mod exists;
