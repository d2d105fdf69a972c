//! Server role repository.
//!
//! Backs the bot's guild role sync. Every role in the guild is tracked, not
//! just roles that have a privileged-role mapping, so the admin UI can offer
//! the full role list.

use chrono::Utc;
use sea_orm::{
    sea_query::OnConflict, ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter,
    QueryOrder,
};

use crate::server::{error::AppError, model::role::ServerRole};

/// Repository providing database operations for guild roles.
pub struct ServerRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ServerRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts or updates a guild role by its Discord role ID.
    pub async fn upsert(
        &self,
        role_id: &str,
        role_name: &str,
        guild_id: &str,
    ) -> Result<ServerRole, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::ServerRole::insert(entity::server_role::ActiveModel {
            role_id: ActiveValue::Set(role_id.to_string()),
            role_name: ActiveValue::Set(role_name.to_string()),
            guild_id: ActiveValue::Set(guild_id.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .on_conflict(
            OnConflict::column(entity::server_role::Column::RoleId)
                .update_columns([
                    entity::server_role::Column::RoleName,
                    entity::server_role::Column::GuildId,
                    entity::server_role::Column::UpdatedAt,
                ])
                .to_owned(),
        )
        .exec_with_returning(self.db)
        .await?;

        Ok(ServerRole::from_entity(entity))
    }

    /// Gets all known guild roles ordered by name.
    pub async fn get_all(&self) -> Result<Vec<ServerRole>, AppError> {
        let entities = entity::prelude::ServerRole::find()
            .order_by_asc(entity::server_role::Column::RoleName)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ServerRole::from_entity).collect())
    }

    /// Deletes a guild role by Discord role ID.
    pub async fn delete(&self, role_id: &str) -> Result<(), AppError> {
        entity::prelude::ServerRole::delete_many()
            .filter(entity::server_role::Column::RoleId.eq(role_id))
            .exec(self.db)
            .await?;
        Ok(())
    }

    /// Deletes roles of a guild that are not in the given ID set.
    ///
    /// Used during bulk sync to drop roles deleted while the bot was offline.
    pub async fn delete_missing(
        &self,
        guild_id: &str,
        keep_role_ids: &[String],
    ) -> Result<(), AppError> {
        let mut query = entity::prelude::ServerRole::delete_many()
            .filter(entity::server_role::Column::GuildId.eq(guild_id));

        if !keep_role_ids.is_empty() {
            query = query.filter(
                entity::server_role::Column::RoleId.is_not_in(keep_role_ids.iter().cloned()),
            );
        }

        query.exec(self.db).await?;
        Ok(())
    }
}
