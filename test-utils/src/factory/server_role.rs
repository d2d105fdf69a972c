//! Server role factory for creating test Discord role entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};

/// Factory for creating test server roles with customizable fields.
pub struct ServerRoleFactory<'a> {
    db: &'a DatabaseConnection,
    role_id: String,
    role_name: String,
    guild_id: String,
}

impl<'a> ServerRoleFactory<'a> {
    /// Creates a new ServerRoleFactory with default values.
    ///
    /// Defaults:
    /// - role_id: auto-incremented counter value as string
    /// - role_name: `"Server Role {id}"`
    /// - guild_id: `"1000"`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ServerRoleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            role_id: id.to_string(),
            role_name: format!("Server Role {}", id),
            guild_id: "1000".to_string(),
        }
    }

    /// Sets the Discord role snowflake.
    ///
    /// # Arguments
    /// - `role_id` - Role snowflake as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role_id(mut self, role_id: impl Into<String>) -> Self {
        self.role_id = role_id.into();
        self
    }

    /// Sets the role display name.
    ///
    /// # Arguments
    /// - `role_name` - Display name for the role
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn role_name(mut self, role_name: impl Into<String>) -> Self {
        self.role_name = role_name.into();
        self
    }

    /// Sets the guild the role belongs to.
    ///
    /// # Arguments
    /// - `guild_id` - Guild snowflake as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn guild_id(mut self, guild_id: impl Into<String>) -> Self {
        self.guild_id = guild_id.into();
        self
    }

    /// Builds and inserts the server role entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::server_role::Model)` - Created role entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::server_role::Model, DbErr> {
        let now = Utc::now();
        entity::server_role::ActiveModel {
            id: ActiveValue::NotSet,
            role_id: ActiveValue::Set(self.role_id),
            role_name: ActiveValue::Set(self.role_name),
            guild_id: ActiveValue::Set(self.guild_id),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a server role with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::server_role::Model)` - Created role entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_server_role(
    db: &DatabaseConnection,
) -> Result<entity::server_role::Model, DbErr> {
    ServerRoleFactory::new(db).build().await
}
