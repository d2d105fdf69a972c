//! Discord user factory for creating test user entities.
//!
//! This module provides factory methods for creating Discord user entities
//! with sensible defaults, reducing boilerplate in tests. The factory supports
//! customization through a builder pattern.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test Discord users with customizable fields.
///
/// Provides a builder pattern for creating user entities with default values
/// that can be overridden as needed for specific test scenarios.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::discord_user::DiscordUserFactory;
///
/// let user = DiscordUserFactory::new(&db)
///     .discord_id("123456789")
///     .roles(vec!["111".to_string(), "222".to_string()])
///     .admin_steam_id("76561198000000001")
///     .build()
///     .await?;
/// ```
pub struct DiscordUserFactory<'a> {
    db: &'a DatabaseConnection,
    discord_id: String,
    name: String,
    roles: Vec<String>,
    whitelist_entries: Value,
    admin_steam_id: Option<String>,
    enabled: bool,
}

impl<'a> DiscordUserFactory<'a> {
    /// Creates a new DiscordUserFactory with default values.
    ///
    /// Defaults:
    /// - discord_id: auto-incremented counter value as string
    /// - name: `"User {id}"`
    /// - roles: empty
    /// - whitelist_entries: empty
    /// - admin_steam_id: `None`
    /// - enabled: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `DiscordUserFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            discord_id: id.to_string(),
            name: format!("User {}", id),
            roles: Vec::new(),
            whitelist_entries: json!([]),
            admin_steam_id: None,
            enabled: true,
        }
    }

    /// Sets the Discord ID for the user.
    ///
    /// # Arguments
    /// - `discord_id` - Discord user ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn discord_id(mut self, discord_id: impl Into<String>) -> Self {
        self.discord_id = discord_id.into();
        self
    }

    /// Sets the display name for the user.
    ///
    /// # Arguments
    /// - `name` - Display name for the user
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Sets the Discord role IDs held by the user.
    ///
    /// # Arguments
    /// - `roles` - Role snowflakes as strings
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn roles(mut self, roles: Vec<String>) -> Self {
        self.roles = roles;
        self
    }

    /// Sets the stored whitelist rows for the user.
    ///
    /// Use `helpers::whitelist_row` to build individual row documents.
    ///
    /// # Arguments
    /// - `entries` - JSON array of whitelist row documents
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn whitelist_entries(mut self, entries: Value) -> Self {
        self.whitelist_entries = entries;
        self
    }

    /// Sets the linked admin Steam64 ID for the user.
    ///
    /// # Arguments
    /// - `steam_id` - Steam64 ID as string
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn admin_steam_id(mut self, steam_id: impl Into<String>) -> Self {
        self.admin_steam_id = Some(steam_id.into());
        self
    }

    /// Sets whether the user account is enabled.
    ///
    /// # Arguments
    /// - `enabled` - Whether the user is active
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builds and inserts the user entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::discord_user::Model)` - Created user entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::discord_user::Model, DbErr> {
        let now = Utc::now();
        entity::discord_user::ActiveModel {
            id: ActiveValue::NotSet,
            discord_id: ActiveValue::Set(self.discord_id),
            name: ActiveValue::Set(self.name),
            roles: ActiveValue::Set(json!(self.roles)),
            whitelist_entries: ActiveValue::Set(self.whitelist_entries),
            admin_steam_id: ActiveValue::Set(self.admin_steam_id),
            enabled: ActiveValue::Set(self.enabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a Discord user with default values.
///
/// Shorthand for `DiscordUserFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::discord_user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user(db: &DatabaseConnection) -> Result<entity::discord_user::Model, DbErr> {
    DiscordUserFactory::new(db).build().await
}

/// Creates a Discord user holding the given role IDs.
///
/// # Arguments
/// - `db` - Database connection
/// - `roles` - Role snowflakes as strings
///
/// # Returns
/// - `Ok(entity::discord_user::Model)` - Created user entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_user_with_roles(
    db: &DatabaseConnection,
    roles: Vec<String>,
) -> Result<entity::discord_user::Model, DbErr> {
    DiscordUserFactory::new(db).roles(roles).build().await
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::TestBuilder;
    use entity::prelude::*;

    #[tokio::test]
    async fn creates_user_with_defaults() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(DiscordUser)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = create_user(db).await?;

        assert!(!user.discord_id.is_empty());
        assert!(!user.name.is_empty());
        assert!(user.enabled);
        assert_eq!(user.roles, json!([]));

        Ok(())
    }

    #[tokio::test]
    async fn creates_user_with_custom_values() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(DiscordUser)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user = DiscordUserFactory::new(db)
            .discord_id("123456789")
            .name("CustomUser")
            .roles(vec!["111".to_string()])
            .admin_steam_id("76561198000000001")
            .enabled(false)
            .build()
            .await?;

        assert_eq!(user.discord_id, "123456789");
        assert_eq!(user.name, "CustomUser");
        assert_eq!(user.roles, json!(["111"]));
        assert_eq!(user.admin_steam_id.as_deref(), Some("76561198000000001"));
        assert!(!user.enabled);

        Ok(())
    }

    #[tokio::test]
    async fn creates_multiple_unique_users() -> Result<(), DbErr> {
        let test = TestBuilder::new()
            .with_table(DiscordUser)
            .build()
            .await
            .unwrap();
        let db = test.db.as_ref().unwrap();

        let user1 = create_user(db).await?;
        let user2 = create_user(db).await?;

        assert_ne!(user1.discord_id, user2.discord_id);
        assert_ne!(user1.name, user2.name);

        Ok(())
    }
}
