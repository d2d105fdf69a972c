//! List endpoint entity.
//!
//! A named, filterable view of whitelist data served at `/lists/{list_name}`.
//! The `admin_groups` column embeds snapshots of the groups the list draws
//! from, as a JSON array of group documents.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "list_endpoint")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub list_name: String,
    /// Embedded admin group snapshots as a JSON array.
    #[sea_orm(column_type = "Json")]
    pub admin_groups: Json,
    /// Expose users holding any permission from any configured group.
    pub all_roles_enabled: bool,
    /// Expose only users resolved to the distinguished whitelist group.
    pub use_whitelist_group: bool,
    /// Disabled lists are served as 404, never as an empty list.
    pub enabled: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
