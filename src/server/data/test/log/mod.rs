use crate::server::{data::log::LogRepository, error::AppError, model::log::CreateLogParam};
use test_utils::builder::TestBuilder;

mod create;
mod get_recent;
