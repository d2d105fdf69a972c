pub mod admin_group;
pub mod auth;
pub mod key;
pub mod list;
pub mod log;
pub mod role;
pub mod user;
pub mod whitelist;
