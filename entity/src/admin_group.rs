//! Admin group entity.
//!
//! A named bundle of in-game permissions. The `permissions` column is a JSON
//! array whose members must come from the fixed permission catalog; validation
//! happens in the service layer before anything reaches this table.

use sea_orm::entity::prelude::*;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "admin_group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    #[sea_orm(unique)]
    pub group_name: String,
    /// JSON array of permission identifiers from the catalog.
    #[sea_orm(column_type = "Json")]
    pub permissions: Json,
    pub enabled: bool,
    /// At most one group may carry this flag; enforced by the service layer.
    pub is_whitelist_group: bool,
    pub created_at: DateTimeUtc,
    pub updated_at: DateTimeUtc,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
