//! Discord user DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::whitelist::WhitelistRowDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DiscordUserDto {
    #[serde(rename = "discordID")]
    pub discord_id: String,
    pub name: String,
    pub roles: Vec<String>,
    pub whitelist_entries: Vec<WhitelistRowDto>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_steam_id: Option<String>,
    pub enabled: bool,
}

/// Admin payload for toggling a user or linking their admin Steam ID.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdateDiscordUserDto {
    #[serde(default)]
    pub enabled: Option<bool>,
    #[serde(default)]
    pub admin_steam_id: Option<String>,
}

/// Response body for `GET /api/auth/user`.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthUserDto {
    #[serde(rename = "discordID")]
    pub discord_id: String,
    pub name: String,
    pub is_admin: bool,
}
