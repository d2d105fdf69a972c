//! Factory methods for creating test data.
//!
//! This module provides factory methods for creating test entities with sensible
//! defaults, reducing boilerplate in tests. Each entity has its own factory
//! module with both a `Factory` struct for customization and a `create_*`
//! convenience function for quick default creation.
//!
//! # Basic Usage
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! #[tokio::test]
//! async fn test_example() -> Result<(), sea_orm::DbErr> {
//!     let db = /* ... */;
//!
//!     // Create with defaults
//!     let user = factory::discord_user::create_user(&db).await?;
//!     let group = factory::admin_group::create_group(&db).await?;
//!
//!     Ok(())
//! }
//! ```
//!
//! # Customization
//!
//! Use the factory builders for custom values:
//!
//! ```rust,ignore
//! use test_utils::factory;
//!
//! let user = factory::discord_user::DiscordUserFactory::new(&db)
//!     .discord_id("987654321")
//!     .roles(vec!["111".to_string()])
//!     .admin_steam_id("76561198000000001")
//!     .build()
//!     .await?;
//! ```
//!
//! # Available Factories
//!
//! - `discord_user` - Create Discord user entities
//! - `admin_group` - Create admin group entities
//! - `privileged_role` - Create privileged role entities
//! - `server_role` - Create server role entities
//! - `list_endpoint` - Create list endpoint entities
//! - `api_key` - Create API key entities
//! - `helpers` - ID generation and snapshot helpers

pub mod admin_group;
pub mod api_key;
pub mod discord_user;
pub mod helpers;
pub mod list_endpoint;
pub mod privileged_role;
pub mod server_role;

// Re-export commonly used factory functions for concise usage
pub use admin_group::{create_group, create_whitelist_group};
pub use api_key::create_api_key;
pub use discord_user::{create_user, create_user_with_roles};
pub use list_endpoint::create_list;
pub use privileged_role::create_role;
pub use server_role::create_server_role;
