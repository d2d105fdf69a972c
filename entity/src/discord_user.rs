//! Discord user entity.
//!
//! Stores a Discord account linked to the application. The `roles` column holds
//! the user's Discord role IDs and `whitelist_entries` holds the Steam IDs the
//! user has submitted for priority-queue whitelisting, both as JSON documents.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "discord_user")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord snowflake of the account, unique per user.
    #[sea_orm(unique)]
    pub discord_id: String,
    /// Display name of the user at last login or sync.
    pub name: String,
    /// JSON array of Discord role IDs the user currently holds.
    #[sea_orm(column_type = "Json")]
    pub roles: Json,
    /// JSON array of `{steam_id, name?}` whitelist rows.
    #[sea_orm(column_type = "Json")]
    pub whitelist_entries: Json,
    /// Steam64 ID linked for the user's own admin access, if any.
    pub admin_steam_id: Option<String>,
    /// Disabled users are excluded from every list and resolution.
    pub enabled: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
