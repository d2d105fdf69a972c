//! Admin group factory for creating test group entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::json;

/// Factory for creating test admin groups with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::admin_group::AdminGroupFactory;
///
/// let group = AdminGroupFactory::new(&db)
///     .group_name("Moderators")
///     .permissions(vec!["kick".to_string(), "ban".to_string()])
///     .build()
///     .await?;
/// ```
pub struct AdminGroupFactory<'a> {
    db: &'a DatabaseConnection,
    group_name: String,
    permissions: Vec<String>,
    enabled: bool,
    is_whitelist_group: bool,
}

impl<'a> AdminGroupFactory<'a> {
    /// Creates a new AdminGroupFactory with default values.
    ///
    /// Defaults:
    /// - group_name: `"Group {id}"` where id is auto-incremented
    /// - permissions: `["reserve"]`
    /// - enabled: `true`
    /// - is_whitelist_group: `false`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `AdminGroupFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            group_name: format!("Group {}", id),
            permissions: vec!["reserve".to_string()],
            enabled: true,
            is_whitelist_group: false,
        }
    }

    /// Sets the group name.
    ///
    /// # Arguments
    /// - `group_name` - Unique name for the group
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn group_name(mut self, group_name: impl Into<String>) -> Self {
        self.group_name = group_name.into();
        self
    }

    /// Sets the permission identifiers carried by the group.
    ///
    /// # Arguments
    /// - `permissions` - Catalog permission identifiers
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn permissions(mut self, permissions: Vec<String>) -> Self {
        self.permissions = permissions;
        self
    }

    /// Sets whether the group is enabled.
    ///
    /// # Arguments
    /// - `enabled` - Whether the group is active
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Sets whether the group is the distinguished whitelist group.
    ///
    /// # Arguments
    /// - `is_whitelist_group` - Whether the group holds the flag
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn is_whitelist_group(mut self, is_whitelist_group: bool) -> Self {
        self.is_whitelist_group = is_whitelist_group;
        self
    }

    /// Builds and inserts the admin group entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::admin_group::Model)` - Created group entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::admin_group::Model, DbErr> {
        let now = Utc::now();
        entity::admin_group::ActiveModel {
            id: ActiveValue::NotSet,
            group_name: ActiveValue::Set(self.group_name),
            permissions: ActiveValue::Set(json!(self.permissions)),
            enabled: ActiveValue::Set(self.enabled),
            is_whitelist_group: ActiveValue::Set(self.is_whitelist_group),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates an admin group with default values.
///
/// Shorthand for `AdminGroupFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::admin_group::Model)` - Created group entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_group(db: &DatabaseConnection) -> Result<entity::admin_group::Model, DbErr> {
    AdminGroupFactory::new(db).build().await
}

/// Creates the distinguished whitelist group.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::admin_group::Model)` - Created group entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_whitelist_group(
    db: &DatabaseConnection,
) -> Result<entity::admin_group::Model, DbErr> {
    AdminGroupFactory::new(db)
        .group_name("Whitelist")
        .is_whitelist_group(true)
        .build()
        .await
}
