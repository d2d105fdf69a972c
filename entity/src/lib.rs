//! SeaORM entity models for the application database.
//!
//! Each module maps one database table. Embedded document fields (admin group
//! snapshots, whitelist rows, role-ID sets) are stored as JSON columns and are
//! parsed into typed domain models at the repository boundary.

pub mod admin_group;
pub mod api_key;
pub mod discord_user;
pub mod list_endpoint;
pub mod log_entry;
pub mod prelude;
pub mod privileged_role;
pub mod server_role;
