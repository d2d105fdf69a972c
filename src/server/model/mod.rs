//! Domain models and operation parameter types.
//!
//! Repositories convert SeaORM entities into these models at the data-layer
//! boundary; controllers convert them into DTOs on the way out. The embedded
//! JSON documents (admin group snapshots, whitelist rows, role-ID sets) are
//! parsed here, so corrupt stored JSON surfaces as an internal error instead
//! of leaking raw `serde_json::Value` into business logic.

pub mod access;
pub mod admin_group;
pub mod key;
pub mod list;
pub mod log;
pub mod role;
pub mod user;
