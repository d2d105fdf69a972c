//! Whitelist DTOs for the profile endpoints.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::{permission::Weekday, role::PrivilegedRoleDto};

/// One whitelist row: a Steam64 ID plus an optional display name.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
pub struct WhitelistRowDto {
    #[serde(rename = "steamID")]
    pub steam_id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// Response body for `GET /api/profile/whitelist`.
///
/// Field names are part of the public contract consumed by existing clients
/// and must stay exactly as spelled here.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct WhitelistProfileDto {
    pub is_authenticated: bool,
    pub valid_roles: Vec<PrivilegedRoleDto>,
    pub whitelist_slots: u32,
    #[schema(value_type = Vec<u8>)]
    pub whitelist_active_days: Vec<Weekday>,
    #[serde(rename = "whitelistedSteam64IDs")]
    pub whitelisted_steam64_ids: Vec<WhitelistRowDto>,
}
