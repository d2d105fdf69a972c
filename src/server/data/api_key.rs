//! API key repository.

use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};

use crate::server::{error::AppError, model::key::ApiKey};

/// Repository providing database operations for API keys.
pub struct ApiKeyRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApiKeyRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Persists a freshly generated key.
    pub async fn create(&self, key: &str) -> Result<ApiKey, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::ApiKey::insert(entity::api_key::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(ApiKey::from_entity(entity))
    }

    /// Checks whether a key exists.
    pub async fn exists(&self, key: &str) -> Result<bool, AppError> {
        let entity = entity::prelude::ApiKey::find()
            .filter(entity::api_key::Column::Key.eq(key))
            .one(self.db)
            .await?;

        Ok(entity.is_some())
    }

    /// Gets all keys, newest first.
    pub async fn get_all(&self) -> Result<Vec<ApiKey>, AppError> {
        let entities = entity::prelude::ApiKey::find()
            .order_by_desc(entity::api_key::Column::CreatedAt)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(ApiKey::from_entity).collect())
    }

    /// Deletes a key.
    ///
    /// # Returns
    /// - `Ok(true)` - Key existed and was revoked
    /// - `Ok(false)` - No such key
    pub async fn delete(&self, key: &str) -> Result<bool, AppError> {
        let result = entity::prelude::ApiKey::delete_many()
            .filter(entity::api_key::Column::Key.eq(key))
            .exec(self.db)
            .await?;

        Ok(result.rows_affected > 0)
    }
}
