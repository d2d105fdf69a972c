//! List endpoint DTOs.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::model::admin_group::AdminGroupDto;

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct ListEndpointDto {
    pub list_name: String,
    pub admin_groups: Vec<AdminGroupDto>,
    pub all_roles_enabled: bool,
    pub use_whitelist_group: bool,
    pub enabled: bool,
}

/// Payload for creating or updating a list endpoint.
#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpsertListEndpointDto {
    pub list_name: String,
    #[serde(default)]
    pub admin_groups: Vec<AdminGroupDto>,
    #[serde(default = "default_true")]
    pub all_roles_enabled: bool,
    #[serde(default)]
    pub use_whitelist_group: bool,
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}
