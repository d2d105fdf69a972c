mod admin_group;
mod api_key;
mod discord_user;
mod list_endpoint;
mod log;
mod privileged_role;
mod server_role;
