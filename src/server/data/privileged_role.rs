//! Privileged role repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        admin_group::AdminGroup,
        role::{PrivilegedRole, UpsertPrivilegedRoleParam},
    },
};

/// Repository providing database operations for privileged roles.
pub struct PrivilegedRoleRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrivilegedRoleRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn active_days_json(param: &UpsertPrivilegedRoleParam) -> Result<serde_json::Value, AppError> {
        serde_json::to_value(&param.active_days)
            .map_err(|e| AppError::InternalError(format!("Failed to serialize active days: {}", e)))
    }

    /// Inserts a new privileged role.
    ///
    /// The attached admin group, if any, is embedded as a snapshot of its
    /// state at creation time.
    pub async fn create(&self, param: UpsertPrivilegedRoleParam) -> Result<PrivilegedRole, AppError> {
        let now = Utc::now();
        let active_days = Self::active_days_json(&param)?;

        let entity = entity::prelude::PrivilegedRole::insert(
            entity::privileged_role::ActiveModel {
                role_id: ActiveValue::Set(param.role_id),
                role_name: ActiveValue::Set(param.role_name),
                admin_group: ActiveValue::Set(
                    param.admin_group.as_ref().map(AdminGroup::to_snapshot),
                ),
                active_days: ActiveValue::Set(active_days),
                whitelist_slots: ActiveValue::Set(param.whitelist_slots as i32),
                enabled: ActiveValue::Set(param.enabled),
                created_at: ActiveValue::Set(now),
                updated_at: ActiveValue::Set(now),
                ..Default::default()
            },
        )
        .exec_with_returning(self.db)
        .await?;

        PrivilegedRole::from_entity(entity)
    }

    /// Finds a privileged role by its Discord role ID.
    pub async fn find_by_role_id(
        &self,
        role_id: &str,
    ) -> Result<Option<PrivilegedRole>, AppError> {
        let entity = entity::prelude::PrivilegedRole::find()
            .filter(entity::privileged_role::Column::RoleId.eq(role_id))
            .one(self.db)
            .await?;

        entity.map(PrivilegedRole::from_entity).transpose()
    }

    /// Gets all privileged roles ordered by role name.
    pub async fn get_all(&self) -> Result<Vec<PrivilegedRole>, AppError> {
        let entities = entity::prelude::PrivilegedRole::find()
            .order_by_asc(entity::privileged_role::Column::RoleName)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(PrivilegedRole::from_entity)
            .collect()
    }

    /// Updates an existing privileged role identified by Discord role ID.
    ///
    /// # Returns
    /// - `Ok(Some(PrivilegedRole))` - Updated role
    /// - `Ok(None)` - No role with that ID
    pub async fn update(
        &self,
        role_id: &str,
        param: UpsertPrivilegedRoleParam,
    ) -> Result<Option<PrivilegedRole>, AppError> {
        let Some(entity) = entity::prelude::PrivilegedRole::find()
            .filter(entity::privileged_role::Column::RoleId.eq(role_id))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let active_days = Self::active_days_json(&param)?;

        let mut active: entity::privileged_role::ActiveModel = entity.into();
        active.role_id = ActiveValue::Set(param.role_id);
        active.role_name = ActiveValue::Set(param.role_name);
        active.admin_group =
            ActiveValue::Set(param.admin_group.as_ref().map(AdminGroup::to_snapshot));
        active.active_days = ActiveValue::Set(active_days);
        active.whitelist_slots = ActiveValue::Set(param.whitelist_slots as i32);
        active.enabled = ActiveValue::Set(param.enabled);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = entity::prelude::PrivilegedRole::update(active)
            .exec(self.db)
            .await?;

        PrivilegedRole::from_entity(updated).map(Some)
    }

    /// Deletes a privileged role by Discord role ID.
    ///
    /// # Returns
    /// - `Ok(true)` - Role existed and was deleted
    /// - `Ok(false)` - No role with that ID
    pub async fn delete(&self, role_id: &str) -> Result<bool, AppError> {
        let result = entity::prelude::PrivilegedRole::delete_many()
            .filter(entity::privileged_role::Column::RoleId.eq(role_id))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
