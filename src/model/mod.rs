//! Shared data transfer objects for the HTTP API.
//!
//! These types define the JSON wire format between the server and its clients.
//! Domain models live in `server::model`; controllers convert between the two
//! at the boundary.

pub mod admin_group;
pub mod api;
pub mod key;
pub mod list;
pub mod log;
pub mod permission;
pub mod role;
pub mod user;
pub mod whitelist;
