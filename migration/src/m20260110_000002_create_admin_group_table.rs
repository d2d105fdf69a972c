use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(AdminGroup::Id))
                    .col(string_uniq(AdminGroup::GroupName))
                    .col(json(AdminGroup::Permissions))
                    .col(boolean(AdminGroup::Enabled))
                    .col(boolean(AdminGroup::IsWhitelistGroup))
                    .col(timestamp_with_time_zone(AdminGroup::CreatedAt))
                    .col(timestamp_with_time_zone(AdminGroup::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminGroup::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum AdminGroup {
    Table,
    Id,
    GroupName,
    Permissions,
    Enabled,
    IsWhitelistGroup,
    CreatedAt,
    UpdatedAt,
}
