//! Privileged role entity.
//!
//! Maps a Discord role to whitelist slots, active weekdays, and an optional
//! admin group. The `admin_group` column embeds a snapshot of the group as a
//! JSON document; edits to the canonical group record do not propagate here.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "privileged_role")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    /// Discord role snowflake, unique per role.
    #[sea_orm(unique)]
    pub role_id: String,
    pub role_name: String,
    /// Embedded admin group snapshot as JSON, if one is attached.
    #[sea_orm(column_type = "Json", nullable)]
    pub admin_group: Option<Json>,
    /// JSON array of weekday numbers (0 = Sunday .. 6 = Saturday).
    #[sea_orm(column_type = "Json")]
    pub active_days: Json,
    pub whitelist_slots: i32,
    pub enabled: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
