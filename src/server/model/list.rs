//! List endpoint domain model.

use crate::{
    model::list::{ListEndpointDto, UpsertListEndpointDto},
    server::{error::AppError, model::admin_group::AdminGroup},
};

/// A named, filterable view of whitelist data.
///
/// The configured admin groups are snapshots embedded at configuration time,
/// not references to the canonical group records.
#[derive(Debug, Clone, PartialEq)]
pub struct ListEndpoint {
    pub list_name: String,
    pub admin_groups: Vec<AdminGroup>,
    pub all_roles_enabled: bool,
    pub use_whitelist_group: bool,
    pub enabled: bool,
}

impl ListEndpoint {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(ListEndpoint)` - The converted list configuration
    /// - `Err(AppError::InternalError)` - The stored group snapshots failed
    ///   to parse
    pub fn from_entity(entity: entity::list_endpoint::Model) -> Result<Self, AppError> {
        let snapshots: Vec<serde_json::Value> = serde_json::from_value(entity.admin_groups)
            .map_err(|e| {
                AppError::InternalError(format!(
                    "Corrupt admin groups JSON for list '{}': {}",
                    entity.list_name, e
                ))
            })?;

        let admin_groups = snapshots
            .into_iter()
            .map(AdminGroup::from_snapshot)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            list_name: entity.list_name,
            admin_groups,
            all_roles_enabled: entity.all_roles_enabled,
            use_whitelist_group: entity.use_whitelist_group,
            enabled: entity.enabled,
        })
    }

    pub fn into_dto(self) -> ListEndpointDto {
        ListEndpointDto {
            list_name: self.list_name,
            admin_groups: self
                .admin_groups
                .into_iter()
                .map(AdminGroup::into_dto)
                .collect(),
            all_roles_enabled: self.all_roles_enabled,
            use_whitelist_group: self.use_whitelist_group,
            enabled: self.enabled,
        }
    }
}

/// Parameters for creating or updating a list endpoint.
#[derive(Debug, Clone)]
pub struct UpsertListEndpointParam {
    pub list_name: String,
    pub admin_groups: Vec<AdminGroup>,
    pub all_roles_enabled: bool,
    pub use_whitelist_group: bool,
    pub enabled: bool,
}

impl From<UpsertListEndpointDto> for UpsertListEndpointParam {
    fn from(dto: UpsertListEndpointDto) -> Self {
        Self {
            list_name: dto.list_name,
            admin_groups: dto
                .admin_groups
                .into_iter()
                .map(AdminGroup::from_dto)
                .collect(),
            all_roles_enabled: dto.all_roles_enabled,
            use_whitelist_group: dto.use_whitelist_group,
            enabled: dto.enabled,
        }
    }
}
