//! API key factory for creating test key entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Creates an API key with a unique generated value.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::api_key::Model)` - Created key entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_api_key(db: &DatabaseConnection) -> Result<entity::api_key::Model, DbErr> {
    create_api_key_with_value(db, format!("test-key-{}", next_id())).await
}

/// Creates an API key with a specific value.
///
/// # Arguments
/// - `db` - Database connection
/// - `key` - Key string to store
///
/// # Returns
/// - `Ok(entity::api_key::Model)` - Created key entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_api_key_with_value(
    db: &DatabaseConnection,
    key: impl Into<String>,
) -> Result<entity::api_key::Model, DbErr> {
    let now = Utc::now();
    entity::api_key::ActiveModel {
        id: ActiveValue::NotSet,
        key: ActiveValue::Set(key.into()),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
    }
    .insert(db)
    .await
}
