//! Privileged role and server role DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{admin_group::AdminGroupDto, permission::Weekday};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrivilegedRoleDto {
    #[serde(rename = "roleID")]
    pub role_id: String,
    pub role_name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_group: Option<AdminGroupDto>,
    #[schema(value_type = Vec<u8>)]
    pub active_days: Vec<Weekday>,
    pub whitelist_slots: u32,
    pub enabled: bool,
}

/// Payload for creating or updating a privileged role.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertPrivilegedRoleDto {
    #[serde(rename = "roleID")]
    pub role_id: String,
    pub role_name: String,
    #[serde(default)]
    pub admin_group: Option<AdminGroupDto>,
    #[schema(value_type = Vec<u8>)]
    pub active_days: Vec<Weekday>,
    #[serde(default)]
    pub whitelist_slots: u32,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

/// A Discord role known to the guild, synced by the bot.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ServerRoleDto {
    #[serde(rename = "roleID")]
    pub role_id: String,
    pub role_name: String,
    #[serde(rename = "guildID")]
    pub guild_id: String,
}
