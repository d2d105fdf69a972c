//! Admin group DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::permission::Permission;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AdminGroupDto {
    pub group_name: String,
    pub permissions: Vec<Permission>,
    pub enabled: bool,
    pub is_whitelist_group: bool,
}

/// Payload for creating or updating an admin group.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertAdminGroupDto {
    pub group_name: String,
    pub permissions: Vec<Permission>,
    #[serde(default = "default_true")]
    pub enabled: bool,
    #[serde(default)]
    pub is_whitelist_group: bool,
}

fn default_true() -> bool {
    true
}

/// One entry of the permission catalog with its description, as served to
/// the group editor UI.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
pub struct PermissionInfoDto {
    pub permission: Permission,
    pub description: String,
}
