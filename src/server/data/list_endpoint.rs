//! List endpoint repository.

use chrono::Utc;
use sea_orm::{
    ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

use crate::server::{
    error::AppError,
    model::{
        admin_group::AdminGroup,
        list::{ListEndpoint, UpsertListEndpointParam},
    },
};

/// Repository providing database operations for list endpoints.
pub struct ListEndpointRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListEndpointRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    fn groups_json(param: &UpsertListEndpointParam) -> serde_json::Value {
        serde_json::Value::Array(
            param
                .admin_groups
                .iter()
                .map(AdminGroup::to_snapshot)
                .collect(),
        )
    }

    /// Inserts a new list endpoint with embedded group snapshots.
    pub async fn create(&self, param: UpsertListEndpointParam) -> Result<ListEndpoint, AppError> {
        let now = Utc::now();
        let admin_groups = Self::groups_json(&param);

        let entity = entity::prelude::ListEndpoint::insert(entity::list_endpoint::ActiveModel {
            list_name: ActiveValue::Set(param.list_name),
            admin_groups: ActiveValue::Set(admin_groups),
            all_roles_enabled: ActiveValue::Set(param.all_roles_enabled),
            use_whitelist_group: ActiveValue::Set(param.use_whitelist_group),
            enabled: ActiveValue::Set(param.enabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        ListEndpoint::from_entity(entity)
    }

    /// Finds a list endpoint by its unique name.
    pub async fn find_by_name(&self, list_name: &str) -> Result<Option<ListEndpoint>, AppError> {
        let entity = entity::prelude::ListEndpoint::find()
            .filter(entity::list_endpoint::Column::ListName.eq(list_name))
            .one(self.db)
            .await?;

        entity.map(ListEndpoint::from_entity).transpose()
    }

    /// Gets all list endpoints ordered by name.
    pub async fn get_all(&self) -> Result<Vec<ListEndpoint>, AppError> {
        let entities = entity::prelude::ListEndpoint::find()
            .order_by_asc(entity::list_endpoint::Column::ListName)
            .all(self.db)
            .await?;

        entities
            .into_iter()
            .map(ListEndpoint::from_entity)
            .collect()
    }

    /// Updates an existing list endpoint identified by name.
    pub async fn update(
        &self,
        list_name: &str,
        param: UpsertListEndpointParam,
    ) -> Result<Option<ListEndpoint>, AppError> {
        let Some(entity) = entity::prelude::ListEndpoint::find()
            .filter(entity::list_endpoint::Column::ListName.eq(list_name))
            .one(self.db)
            .await?
        else {
            return Ok(None);
        };

        let admin_groups = Self::groups_json(&param);

        let mut active: entity::list_endpoint::ActiveModel = entity.into();
        active.list_name = ActiveValue::Set(param.list_name);
        active.admin_groups = ActiveValue::Set(admin_groups);
        active.all_roles_enabled = ActiveValue::Set(param.all_roles_enabled);
        active.use_whitelist_group = ActiveValue::Set(param.use_whitelist_group);
        active.enabled = ActiveValue::Set(param.enabled);
        active.updated_at = ActiveValue::Set(Utc::now());

        let updated = entity::prelude::ListEndpoint::update(active)
            .exec(self.db)
            .await?;

        ListEndpoint::from_entity(updated).map(Some)
    }

    /// Deletes a list endpoint by name.
    pub async fn delete(&self, list_name: &str) -> Result<bool, AppError> {
        let result = entity::prelude::ListEndpoint::delete_many()
            .filter(entity::list_endpoint::Column::ListName.eq(list_name))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
