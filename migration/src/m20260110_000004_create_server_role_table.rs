use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ServerRole::Table)
                    .if_not_exists()
                    .col(pk_auto(ServerRole::Id))
                    .col(string_uniq(ServerRole::RoleId))
                    .col(string(ServerRole::RoleName))
                    .col(string(ServerRole::GuildId))
                    .col(timestamp_with_time_zone(ServerRole::CreatedAt))
                    .col(timestamp_with_time_zone(ServerRole::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ServerRole::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ServerRole {
    Table,
    Id,
    RoleId,
    RoleName,
    GuildId,
    CreatedAt,
    UpdatedAt,
}
