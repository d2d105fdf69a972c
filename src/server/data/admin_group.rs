//! Admin group repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::admin_group::{AdminGroup, UpsertAdminGroupParam},
};

/// Repository providing database operations for admin groups.
pub struct AdminGroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminGroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Inserts a new admin group.
    ///
    /// Catalog membership and name uniqueness are validated by the service
    /// layer before this runs; the unique index on `group_name` is the
    /// last line of defense against concurrent creates.
    pub async fn create(&self, param: UpsertAdminGroupParam) -> Result<AdminGroup, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::AdminGroup::insert(entity::admin_group::ActiveModel {
            group_name: ActiveValue::Set(param.group_name),
            permissions: ActiveValue::Set(serde_json::to_value(&param.permissions).map_err(
                |e| AppError::InternalError(format!("Failed to serialize permissions: {}", e)),
            )?),
            enabled: ActiveValue::Set(param.enabled),
            is_whitelist_group: ActiveValue::Set(param.is_whitelist_group),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        AdminGroup::from_entity(entity)
    }

    /// Finds a group by its unique name.
    pub async fn find_by_name(&self, group_name: &str) -> Result<Option<AdminGroup>, AppError> {
        let entity = entity::prelude::AdminGroup::find()
            .filter(entity::admin_group::Column::GroupName.eq(group_name))
            .one(self.db)
            .await?;

        entity.map(AdminGroup::from_entity).transpose()
    }

    /// Finds the distinguished whitelist group, if one is configured.
    pub async fn find_whitelist_group(&self) -> Result<Option<AdminGroup>, AppError> {
        let entity = entity::prelude::AdminGroup::find()
            .filter(entity::admin_group::Column::IsWhitelistGroup.eq(true))
            .one(self.db)
            .await?;

        entity.map(AdminGroup::from_entity).transpose()
    }

    /// Gets all groups ordered alphabetically by name.
    pub async fn get_all(&self) -> Result<Vec<AdminGroup>, AppError> {
        let entities = entity::prelude::AdminGroup::find()
            .order_by_asc(entity::admin_group::Column::GroupName)
            .all(self.db)
            .await?;

        entities.into_iter().map(AdminGroup::from_entity).collect()
    }

    /// Updates an existing group identified by name.
    ///
    /// # Returns
    /// - `Ok(Some(AdminGroup))` - Updated group
    /// - `Ok(None)` - No group with that name
    /// - `Err(AppError)` - Database error during update
    pub async fn update(
        &self,
        group_name: &str,
        param: UpsertAdminGroupParam,
    ) -> Result<Option<AdminGroup>, AppError> {
        let Some(entity) = entity::prelude::AdminGroup::find()
            .filter(entity::admin_group::Column::GroupName.eq(group_name))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let mut active: entity::admin_group::ActiveModel = entity.into();
        active.group_name = ActiveValue::Set(param.group_name);
        active.permissions = ActiveValue::Set(serde_json::to_value(&param.permissions).map_err(
            |e| AppError::InternalError(format!("Failed to serialize permissions: {}", e)),
        )?);
        active.enabled = ActiveValue::Set(param.enabled);
        active.is_whitelist_group = ActiveValue::Set(param.is_whitelist_group);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = entity::prelude::AdminGroup::update(active)
            .exec(self.db)
            .await?;

        AdminGroup::from_entity(updated).map(Some)
    }

    /// Deletes a group by name.
    ///
    /// # Returns
    /// - `Ok(true)` - Group existed and was deleted
    /// - `Ok(false)` - No group with that name
    pub async fn delete(&self, group_name: &str) -> Result<bool, AppError> {
        let result = entity::prelude::AdminGroup::delete_many()
            .filter(entity::admin_group::Column::GroupName.eq(group_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
