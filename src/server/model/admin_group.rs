//! Admin group domain model.

use serde::{Deserialize, Serialize};

use crate::{
    model::{
        admin_group::{AdminGroupDto, UpsertAdminGroupDto},
        permission::Permission,
    },
    server::error::AppError,
};

/// A named bundle of in-game permissions.
///
/// This type doubles as the stored snapshot format: privileged roles and list
/// endpoints embed a serialized copy of the group rather than a reference, so
/// edits to the canonical record do not propagate into existing embeddings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AdminGroup {
    pub group_name: String,
    pub permissions: Vec<Permission>,
    pub enabled: bool,
    pub is_whitelist_group: bool,
}

impl AdminGroup {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(AdminGroup)` - The converted group
    /// - `Err(AppError::InternalError)` - The stored permissions JSON failed
    ///   to parse, which indicates corrupt data
    pub fn from_entity(entity: entity::admin_group::Model) -> Result<Self, AppError> {
        let permissions: Vec<Permission> = serde_json::from_value(entity.permissions)
            .map_err(|e| {
                AppError::InternalError(format!(
                    "Corrupt permissions JSON for group '{}': {}",
                    entity.group_name, e
                ))
            })?;

        Ok(Self {
            group_name: entity.group_name,
            permissions,
            enabled: entity.enabled,
            is_whitelist_group: entity.is_whitelist_group,
        })
    }

    /// Parses an embedded group snapshot out of a JSON column value.
    pub fn from_snapshot(value: serde_json::Value) -> Result<Self, AppError> {
        serde_json::from_value(value)
            .map_err(|e| AppError::InternalError(format!("Corrupt admin group snapshot: {}", e)))
    }

    /// Serializes the group into its stored snapshot form.
    pub fn to_snapshot(&self) -> serde_json::Value {
        serde_json::json!({
            "group_name": self.group_name,
            "permissions": self.permissions,
            "enabled": self.enabled,
            "is_whitelist_group": self.is_whitelist_group,
        })
    }

    pub fn into_dto(self) -> AdminGroupDto {
        AdminGroupDto {
            group_name: self.group_name,
            permissions: self.permissions,
            enabled: self.enabled,
            is_whitelist_group: self.is_whitelist_group,
        }
    }

    pub fn from_dto(dto: AdminGroupDto) -> Self {
        Self {
            group_name: dto.group_name,
            permissions: dto.permissions,
            enabled: dto.enabled,
            is_whitelist_group: dto.is_whitelist_group,
        }
    }
}

/// Parameters for creating or updating an admin group.
#[derive(Debug, Clone)]
pub struct UpsertAdminGroupParam {
    pub group_name: String,
    pub permissions: Vec<Permission>,
    pub enabled: bool,
    pub is_whitelist_group: bool,
}

impl From<UpsertAdminGroupDto> for UpsertAdminGroupParam {
    fn from(dto: UpsertAdminGroupDto) -> Self {
        Self {
            group_name: dto.group_name,
            permissions: dto.permissions,
            enabled: dto.enabled,
            is_whitelist_group: dto.is_whitelist_group,
        }
    }
}
