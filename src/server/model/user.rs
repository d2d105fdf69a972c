//! Discord user domain model and parameters.

use serde::{Deserialize, Serialize};

use crate::{
    model::{user::DiscordUserDto, whitelist::WhitelistRowDto},
    server::error::AppError,
};

/// One whitelist row stored on a user: a Steam64 ID plus an optional label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WhitelistEntry {
    pub steam_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

impl WhitelistEntry {
    pub fn into_dto(self) -> WhitelistRowDto {
        WhitelistRowDto {
            steam_id: self.steam_id,
            name: self.name,
        }
    }

    pub fn from_dto(dto: WhitelistRowDto) -> Self {
        Self {
            steam_id: dto.steam_id,
            name: dto.name,
        }
    }
}

/// A Discord account linked to the application.
///
/// `roles` holds the Discord role IDs the bot last observed for the user;
/// authorization resolution matches these against privileged role records at
/// read time. Nothing derived is persisted.
#[derive(Debug, Clone, PartialEq)]
pub struct DiscordUser {
    pub id: i32,
    pub discord_id: String,
    pub name: String,
    pub roles: Vec<String>,
    pub whitelist_entries: Vec<WhitelistEntry>,
    pub admin_steam_id: Option<String>,
    pub enabled: bool,
}

impl DiscordUser {
    /// Converts an entity model to a domain model at the repository boundary.
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - The converted user
    /// - `Err(AppError::InternalError)` - A stored JSON column failed to parse
    pub fn from_entity(entity: entity::discord_user::Model) -> Result<Self, AppError> {
        let roles: Vec<String> = serde_json::from_value(entity.roles).map_err(|e| {
            AppError::InternalError(format!(
                "Corrupt roles JSON for user {}: {}",
                entity.discord_id, e
            ))
        })?;

        let whitelist_entries: Vec<WhitelistEntry> =
            serde_json::from_value(entity.whitelist_entries).map_err(|e| {
                AppError::InternalError(format!(
                    "Corrupt whitelist JSON for user {}: {}",
                    entity.discord_id, e
                ))
            })?;

        Ok(Self {
            id: entity.id,
            discord_id: entity.discord_id,
            name: entity.name,
            roles,
            whitelist_entries,
            admin_steam_id: entity.admin_steam_id,
            enabled: entity.enabled,
        })
    }

    pub fn into_dto(self) -> DiscordUserDto {
        DiscordUserDto {
            discord_id: self.discord_id,
            name: self.name,
            roles: self.roles,
            whitelist_entries: self
                .whitelist_entries
                .into_iter()
                .map(WhitelistEntry::into_dto)
                .collect(),
            admin_steam_id: self.admin_steam_id,
            enabled: self.enabled,
        }
    }
}

/// Parameters for upserting a user during OAuth login.
///
/// Only identity fields are touched; a returning user keeps their stored
/// roles, whitelist entries, and enabled flag.
#[derive(Debug, Clone)]
pub struct UpsertUserParam {
    pub discord_id: String,
    pub name: String,
}

/// Parameters for the admin user-update endpoint.
///
/// `None` fields are left unchanged.
#[derive(Debug, Clone)]
pub struct UpdateUserParam {
    pub discord_id: String,
    pub enabled: Option<bool>,
    pub admin_steam_id: Option<String>,
}
