//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle database operations for
//! each entity in the application. Repositories use SeaORM entity models
//! internally and return domain models, keeping JSON-column parsing at the
//! infrastructure boundary.

pub mod admin_group;
pub mod api_key;
pub mod discord_user;
pub mod list_endpoint;
pub mod log;
pub mod privileged_role;
pub mod server_role;

#[cfg(test)]
mod test;
