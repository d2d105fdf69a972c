use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(PrivilegedRole::Table)
                    .if_not_exists()
                    .col(pk_auto(PrivilegedRole::Id))
                    .col(string_uniq(PrivilegedRole::RoleId))
                    .col(string(PrivilegedRole::RoleName))
                    .col(json_null(PrivilegedRole::AdminGroup))
                    .col(json(PrivilegedRole::ActiveDays))
                    .col(integer(PrivilegedRole::WhitelistSlots))
                    .col(boolean(PrivilegedRole::Enabled))
                    .col(timestamp_with_time_zone(PrivilegedRole::CreatedAt))
                    .col(timestamp_with_time_zone(PrivilegedRole::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(PrivilegedRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum PrivilegedRole {
    Table,
    Id,
    RoleId,
    RoleName,
    AdminGroup,
    ActiveDays,
    WhitelistSlots,
    Enabled,
    CreatedAt,
    UpdatedAt,
}
