//! Discord user repository.
//!
//! Handles user creation during OAuth login, role-set updates from the bot,
//! whitelist entry replacement, and administrative queries.

use chrono::Utc;
use sea_orm::{
    sea_query::{Expr, OnConflict},
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::user::{DiscordUser, UpdateUserParam, UpsertUserParam, WhitelistEntry},
};

/// Repository providing database operations for Discord users.
pub struct DiscordUserRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DiscordUserRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Upserts a user from OAuth login data.
    ///
    /// Inserts a new user with empty role and whitelist sets, or updates an
    /// existing user's display name. Roles, whitelist entries, and the enabled
    /// flag of a returning user are left untouched.
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - The created or updated user
    /// - `Err(AppError)` - Database error during insert or update
    pub async fn upsert(&self, param: UpsertUserParam) -> Result<DiscordUser, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::DiscordUser::insert(entity::discord_user::ActiveModel {
            discord_id: ActiveValue::Set(param.discord_id),
            name: ActiveValue::Set(param.name),
            roles: ActiveValue::Set(serde_json::json!([])),
            whitelist_entries: ActiveValue::Set(serde_json::json!([])),
            admin_steam_id: ActiveValue::Set(None),
            enabled: ActiveValue::Set(true),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::discord_user::Column::DiscordId)
                .update_columns([
                    entity::discord_user::Column::Name,
                    entity::discord_user::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        DiscordUser::from_entity(entity)
    }

    /// Finds a user by their Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordUser))` - User found
    /// - `Ok(None)` - No user with that Discord ID
    /// - `Err(AppError)` - Database error or corrupt stored JSON
    pub async fn find_by_discord_id(
        &self,
        discord_id: &str,
    ) -> Result<Option<DiscordUser>, AppError> {
        let entity = entity::prelude::DiscordUser::find()
            .filter(entity::discord_user::Column::DiscordId.eq(discord_id))
            .one(self.db)
            .await?;

        entity.map(DiscordUser::from_entity).transpose()
    }

    /// Gets all users in insertion order.
    ///
    /// List endpoint output preserves this order, so no re-sorting happens
    /// here or downstream.
    pub async fn get_all(&self) -> Result<Vec<DiscordUser>, AppError> {
        let entities = entity::prelude::DiscordUser::find()
            .order_by_asc(entity::discord_user::Column::Id)
            .all(self.db)
            .await?;

        entities.into_iter().map(DiscordUser::from_entity).collect()
    }

    /// Replaces the stored Discord role-ID set for a user.
    ///
    /// Called by the bot when a member's roles change. A no-op if the user
    /// has never logged into the application.
    pub async fn update_roles(&self, discord_id: &str, roles: &[String]) -> Result<(), AppError> {
        let roles_json = serde_json::to_value(roles)
            .map_err(|e| AppError::InternalError(format!("Failed to serialize roles: {}", e)))?;

        entity::prelude::DiscordUser::update_many()
            .filter(entity::discord_user::Column::DiscordId.eq(discord_id))
            .col_expr(entity::discord_user::Column::Roles, Expr::value(roles_json))
            .col_expr(
                entity::discord_user::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Replaces a user's whitelist entries.
    ///
    /// Only called after the submission has passed validation; the rows
    /// replace the previous set wholesale, never merged.
    pub async fn update_whitelist_entries(
        &self,
        discord_id: &str,
        entries: &[WhitelistEntry],
    ) -> Result<(), AppError> {
        let entries_json = serde_json::to_value(entries).map_err(|e| {
            AppError::InternalError(format!("Failed to serialize whitelist entries: {}", e))
        })?;

        entity::prelude::DiscordUser::update_many()
            .filter(entity::discord_user::Column::DiscordId.eq(discord_id))
            .col_expr(
                entity::discord_user::Column::WhitelistEntries,
                Expr::value(entries_json),
            )
            .col_expr(
                entity::discord_user::Column::UpdatedAt,
                Expr::value(Utc::now()),
            )
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Applies an administrative update to a user.
    ///
    /// # Returns
    /// - `Ok(Some(DiscordUser))` - Updated user
    /// - `Ok(None)` - No user with that Discord ID
    /// - `Err(AppError)` - Database error during update
    pub async fn update(&self, param: UpdateUserParam) -> Result<Option<DiscordUser>, AppError> {
        let Some(entity) = entity::prelude::DiscordUser::find()
            .filter(entity::discord_user::Column::DiscordId.eq(param.discord_id.as_str()))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::discord_user::ActiveModel = entity.into();
        if let Some(enabled) = param.enabled {
            active.enabled = ActiveValue::Set(enabled);
        }
        if let Some(admin_steam_id) = param.admin_steam_id {
            active.admin_steam_id = ActiveValue::Set(Some(admin_steam_id));
        }
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = entity::prelude::DiscordUser::update(active)
            .exec(self.db)
            .await?;

        DiscordUser::from_entity(updated).map(Some)
    }
}
