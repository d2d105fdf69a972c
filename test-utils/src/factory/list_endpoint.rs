//! List endpoint factory for creating test list entities.

use crate::factory::helpers::next_id;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue, DatabaseConnection, DbErr};
use serde_json::{json, Value};

/// Factory for creating test list endpoints with customizable fields.
///
/// # Example
///
/// ```rust,ignore
/// use test_utils::factory::list_endpoint::ListEndpointFactory;
/// use test_utils::factory::helpers::group_snapshot;
///
/// let list = ListEndpointFactory::new(&db)
///     .list_name("admins")
///     .admin_groups(json!([group_snapshot("Moderators", &["kick"], false)]))
///     .build()
///     .await?;
/// ```
pub struct ListEndpointFactory<'a> {
    db: &'a DatabaseConnection,
    list_name: String,
    admin_groups: Value,
    all_roles_enabled: bool,
    use_whitelist_group: bool,
    enabled: bool,
}

impl<'a> ListEndpointFactory<'a> {
    /// Creates a new ListEndpointFactory with default values.
    ///
    /// Defaults:
    /// - list_name: `"list-{id}"` where id is auto-incremented
    /// - admin_groups: empty
    /// - all_roles_enabled: `false`
    /// - use_whitelist_group: `false`
    /// - enabled: `true`
    ///
    /// # Arguments
    /// - `db` - Database connection for inserting the entity
    ///
    /// # Returns
    /// - `ListEndpointFactory` - New factory instance with defaults
    pub fn new(db: &'a DatabaseConnection) -> Self {
        let id = next_id();
        Self {
            db,
            list_name: format!("list-{}", id),
            admin_groups: json!([]),
            all_roles_enabled: false,
            use_whitelist_group: false,
            enabled: true,
        }
    }

    /// Sets the list name.
    ///
    /// # Arguments
    /// - `list_name` - Unique name for the list
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn list_name(mut self, list_name: impl Into<String>) -> Self {
        self.list_name = list_name.into();
        self
    }

    /// Sets the embedded admin group snapshots.
    ///
    /// Use `helpers::group_snapshot` to build the documents.
    ///
    /// # Arguments
    /// - `admin_groups` - JSON array of group snapshots
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn admin_groups(mut self, admin_groups: Value) -> Self {
        self.admin_groups = admin_groups;
        self
    }

    /// Sets the permission-overlap filter mode.
    ///
    /// # Arguments
    /// - `all_roles_enabled` - Whether any permission overlap qualifies
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn all_roles_enabled(mut self, all_roles_enabled: bool) -> Self {
        self.all_roles_enabled = all_roles_enabled;
        self
    }

    /// Sets the whitelist-group filter mode.
    ///
    /// # Arguments
    /// - `use_whitelist_group` - Whether to expose only whitelist users
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn use_whitelist_group(mut self, use_whitelist_group: bool) -> Self {
        self.use_whitelist_group = use_whitelist_group;
        self
    }

    /// Sets whether the list is served at all.
    ///
    /// # Arguments
    /// - `enabled` - Whether the list endpoint is active
    ///
    /// # Returns
    /// - `Self` - Factory instance for method chaining
    pub fn enabled(mut self, enabled: bool) -> Self {
        self.enabled = enabled;
        self
    }

    /// Builds and inserts the list endpoint entity into the database.
    ///
    /// # Returns
    /// - `Ok(entity::list_endpoint::Model)` - Created list entity
    /// - `Err(DbErr)` - Database error during insert
    pub async fn build(self) -> Result<entity::list_endpoint::Model, DbErr> {
        let now = Utc::now();
        entity::list_endpoint::ActiveModel {
            id: ActiveValue::NotSet,
            list_name: ActiveValue::Set(self.list_name),
            admin_groups: ActiveValue::Set(self.admin_groups),
            all_roles_enabled: ActiveValue::Set(self.all_roles_enabled),
            use_whitelist_group: ActiveValue::Set(self.use_whitelist_group),
            enabled: ActiveValue::Set(self.enabled),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
        }
        .insert(self.db)
        .await
    }
}

/// Creates a list endpoint with default values.
///
/// # Arguments
/// - `db` - Database connection
///
/// # Returns
/// - `Ok(entity::list_endpoint::Model)` - Created list entity
/// - `Err(DbErr)` - Database error during insert
pub async fn create_list(db: &DatabaseConnection) -> Result<entity::list_endpoint::Model, DbErr> {
    ListEndpointFactory::new(db).build().await
}
