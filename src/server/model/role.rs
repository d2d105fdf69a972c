//! Privileged role and server role domain models.

use crate::{
    model::{
        permission::Weekday,
        role::{PrivilegedRoleDto, ServerRoleDto, UpsertPrivilegedRoleDto},
    },
    server::{error::AppError, model::admin_group::AdminGroup},
};

/// A Discord role mapped to whitelist slots, active weekdays, and optionally
/// an admin group snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct PrivilegedRole {
    pub role_id: String,
    pub role_name: String,
    pub admin_group: Option<AdminGroup>,
    pub active_days: Vec<Weekday>,
    pub whitelist_slots: u32,
    pub enabled: bool,
}

impl PrivilegedRole {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(PrivilegedRole)` - The converted role
    /// - `Err(AppError::InternalError)` - A stored JSON column failed to parse
    pub fn from_entity(entity: entity::privileged_role::Model) -> Result<Self, AppError> {
        let admin_group = entity
            .admin_group
            .map(AdminGroup::from_snapshot)
            .transpose()?;

        let active_days: Vec<Weekday> =
            serde_json::from_value(entity.active_days).map_err(|e| {
                AppError::InternalError(format!(
                    "Corrupt active days JSON for role {}: {}",
                    entity.role_id, e
                ))
            })?;

        Ok(Self {
            role_id: entity.role_id,
            role_name: entity.role_name,
            admin_group,
            active_days,
            // The column is non-negative by contract; clamp rather than wrap
            // if a bad value ever lands in it.
            whitelist_slots: entity.whitelist_slots.max(0) as u32,
            enabled: entity.enabled,
        })
    }

    pub fn into_dto(self) -> PrivilegedRoleDto {
        PrivilegedRoleDto {
            role_id: self.role_id,
            role_name: self.role_name,
            admin_group: self.admin_group.map(AdminGroup::into_dto),
            active_days: self.active_days,
            whitelist_slots: self.whitelist_slots,
            enabled: self.enabled,
        }
    }
}

/// Parameters for creating or updating a privileged role.
#[derive(Debug, Clone)]
pub struct UpsertPrivilegedRoleParam {
    pub role_id: String,
    pub role_name: String,
    pub admin_group: Option<AdminGroup>,
    pub active_days: Vec<Weekday>,
    pub whitelist_slots: u32,
    pub enabled: bool,
}

impl From<UpsertPrivilegedRoleDto> for UpsertPrivilegedRoleParam {
    fn from(dto: UpsertPrivilegedRoleDto) -> Self {
        Self {
            role_id: dto.role_id,
            role_name: dto.role_name,
            admin_group: dto.admin_group.map(AdminGroup::from_dto),
            active_days: dto.active_days,
            whitelist_slots: dto.whitelist_slots,
            enabled: dto.enabled,
        }
    }
}

/// A Discord role known to a guild, synced by the bot.
#[derive(Debug, Clone, PartialEq)]
pub struct ServerRole {
    pub role_id: String,
    pub role_name: String,
    pub guild_id: String,
}

impl ServerRole {
    pub fn from_entity(entity: entity::server_role::Model) -> Self {
        Self {
            role_id: entity.role_id,
            role_name: entity.role_name,
            guild_id: entity.guild_id,
        }
    }

    pub fn into_dto(self) -> ServerRoleDto {
        ServerRoleDto {
            role_id: self.role_id,
            role_name: self.role_name,
            guild_id: self.guild_id,
        }
    }
}
