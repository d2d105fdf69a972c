pub use sea_orm_migration::prelude::*;

mod m20260110_000001_create_discord_user_table;
mod m20260110_000002_create_admin_group_table;
mod m20260110_000003_create_privileged_role_table;
mod m20260110_000004_create_server_role_table;
mod m20260110_000005_create_list_endpoint_table;
mod m20260110_000006_create_api_key_table;
mod m20260110_000007_create_log_entry_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![
            Box::new(m20260110_000001_create_discord_user_table::Migration),
            Box::new(m20260110_000002_create_admin_group_table::Migration),
            Box::new(m20260110_000003_create_privileged_role_table::Migration),
            Box::new(m20260110_000004_create_server_role_table::Migration),
            Box::new(m20260110_000005_create_list_endpoint_table::Migration),
            Box::new(m20260110_000006_create_api_key_table::Migration),
            Box::new(m20260110_000007_create_log_entry_table::Migration),
        ]
    }
}
