use crate::server::{
    data::discord_user::DiscordUserRepository,
    error::AppError,
    model::user::{UpdateUserParam, UpsertUserParam, WhitelistEntry},
};
use test_utils::{builder::TestBuilder, factory};

mod find_by_discord_id;
mod update;
mod update_roles;
mod update_whitelist_entries;
mod upsert;
