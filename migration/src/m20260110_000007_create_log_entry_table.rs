use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(LogEntry::Table)
                    .if_not_exists()
                    .col(pk_auto(LogEntry::Id))
                    .col(string(LogEntry::Message))
                    .col(string_null(LogEntry::MessageType))
                    .col(timestamp_with_time_zone(LogEntry::CreatedAt))
                    .col(timestamp_with_time_zone(LogEntry::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(LogEntry::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum LogEntry {
    Table,
    Id,
    Message,
    MessageType,
    CreatedAt,
    UpdatedAt,
}
