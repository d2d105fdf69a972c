//! Privileged role factory for creating test role entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test privileged roles with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::privileged_role::PrivilegedRoleFactory;
/// use test_utils::factory::helpers::group_snapshot;
///
/// let role = PrivilegedRoleFactory::new(&db)
///     .role_id("111")
///     .whitelist_slots(3)
///     .admin_group(group_snapshot("Moderators", &["kick", "ban"], false))
///     .build()
///     .await?;
/// ```
pub struct PrivilegedRoleFactory<'a> {
    db: &'a DatabaseConnection,
    role_id: String,
    role_name: String,
    admin_group: Option<Value>,
    active_days: Vec<u8>,
    whitelist_slots: i32,
    enabled: bool,
}

impl<'a> PrivilegedRoleFactory<'a> {
    /// Creates a new PrivilegedRoleFactory with default values.
    ///
    /// Defaults:
    /// - role_id: auto-incremented counter value as string
    /// - role_name: `"Role {id}"`
    /// - admin_group: `None`
    /// - active_days: every weekday (0 through 6)
    /// - whitelist_slots: `1`
    /// - enabled: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `PrivilegedRoleFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            role_id: id.to_string(),
            role_name: format!("Role {}", id),
            admin_group: None,
            active_days: vec![0, 1, 2, 3, 4, 5, 6],
            whitelist_slots: 1,
            enabled: true,
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

    /// Attaches an admin group snapshot to the role.
    ///
    /// Use `helpers::group_snapshot` to build the document.
    ///
    /// # Arguments
    /// - `snapshot` - JSON admin group snapshot
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn admin_group(mut self, snapshot: Value) -> Self {
        self.admin_group = Some(snapshot);
        self
    }

    /// Sets the weekdays the role is active on.
    ///
    /// # Arguments
    /// - `active_days` - Weekday numbers, 0 = Sunday through 6 = Saturday
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn active_days(mut self, active_days: Vec<u8>) -> Self {
        self.active_days = active_days;
        self
    }

    /// Sets the number of whitelist slots granted by the role.
    ///
    /// # Arguments
    /// - `whitelist_slots` - Slot count
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn whitelist_slots(mut self, whitelist_slots: i32) -> Self {
        self.whitelist_slots = whitelist_slots;
        self
    }

    /// Sets whether the role mapping is enabled.
    ///
    /// # Arguments
    /// - `enabled` - Whether the role is active
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builds and inserts the privileged role entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::privileged_role::Model)` - Created role entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::privileged_role::Model, DbErr> {
        let now = Utc::now();
        entity::privileged_role::ActiveModel {
            id: ActiveValue::NotSet,
            role_id: ActiveValue::Set(self.role_id),
            role_name: ActiveValue::Set(self.role_name),
            admin_group: ActiveValue::Set(self.admin_group),
            active_days: ActiveValue::Set(json!(self.active_days)),
            whitelist_slots: ActiveValue::Set(self.whitelist_slots),
            enabled: ActiveValue::Set(self.enabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a privileged role with default values.
///
/// Shorthand for `PrivilegedRoleFactory::new(db).build().await`.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::privileged_role::Model)` - Created role entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_role(db: &DatabaseConnection) -> Result<entity::privileged_role::Model, DbErr> {
    PrivilegedRoleFactory::new(db).build().await
}
