pub use super::admin_group::Entity as AdminGroup;
pub use super::api_key::Entity as ApiKey;
pub use super::discord_user::Entity as DiscordUser;
pub use super::list_endpoint::Entity as ListEndpoint;
pub use super::log_entry::Entity as LogEntry;
pub use super::privileged_role::Entity as PrivilegedRole;
pub use super::server_role::Entity as ServerRole;
