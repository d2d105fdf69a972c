pub mod admin_group;
pub mod audit;
pub mod auth;
pub mod authorization;
pub mod key;
pub mod list;
pub mod role;
pub mod whitelist;
