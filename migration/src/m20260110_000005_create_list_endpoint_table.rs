use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ListEndpoint::Table)
                    .if_not_exists()
                    .col(pk_auto(ListEndpoint::Id))
                    .col(string_uniq(ListEndpoint::ListName))
                    .col(json(ListEndpoint::AdminGroups))
                    .col(boolean(ListEndpoint::AllRolesEnabled))
                    .col(boolean(ListEndpoint::UseWhitelistGroup))
                    .col(boolean(ListEndpoint::Enabled))
                    .col(timestamp_with_time_zone(ListEndpoint::CreatedAt))
                    .col(timestamp_with_time_zone(ListEndpoint::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(ListEndpoint::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum ListEndpoint {
    Table,
    Id,
    ListName,
    AdminGroups,
    AllRolesEnabled,
    UseWhitelistGroup,
    Enabled,
    CreatedAt,
    UpdatedAt,
}
