//! Discord bot keeping guild role data and user role memberships in sync.

use sea_orm::DatabaseConnection;
use serenity::all::{
    ActivityData, Client, Context, EventHandler, GatewayIntents, Guild, GuildId,
    GuildMemberUpdateEvent, Member, Ready, Role, RoleId,
};
use serenity::async_trait;

use crate::server::config::Config;
use crate::server::data::{
    discord_user::DiscordUserRepository, server_role::ServerRoleRepository,
};
use crate::server::error::AppError;

/// Discord bot event handler
struct Handler {
    db: DatabaseConnection,
}

impl Handler {
    /// Replaces a linked user's stored role-ID set.
    ///
    /// Users who never logged into the application have no record; the
    /// update is a silent no-op for them.
    async fn sync_member_roles(&self, discord_id: &str, role_ids: &[RoleId]) {
        let roles: Vec<String> = role_ids.iter().map(|id| id.get().to_string()).collect();

        let user_repo = DiscordUserRepository::new(&self.db);
        if let Err(e) = user_repo.update_roles(discord_id, &roles).await {
            tracing::error!("Failed to update roles for user {}: {:?}", discord_id, e);
        }
    }
}

#[async_trait]
impl EventHandler for Handler {
    /// Called when the bot is ready and connected to Discord
    async fn ready(&self, ctx: Context, ready: Ready) {
        tracing::info!("{} is connected to Discord!", ready.user.name);

        ctx.set_activity(Some(ActivityData::watching("the whitelist")));
    }

    /// Called when a guild becomes available or the bot joins a new guild.
    ///
    /// Performs a full sync: every guild role is upserted, roles deleted
    /// while the bot was offline are dropped, and each member's role set is
    /// written through to their linked user record.
    async fn guild_create(&self, ctx: Context, guild: Guild, _is_new: Option<bool>) {
        let guild_id = guild.id.get().to_string();

        tracing::debug!(
            "Guild create event: {} ({}) - member_count: {}",
            guild.name,
            guild_id,
            guild.member_count
        );

        let role_repo = ServerRoleRepository::new(&self.db);

        let mut synced_role_ids = Vec::with_capacity(guild.roles.len());
        for role in guild.roles.values() {
            let role_id = role.id.get().to_string();
            if let Err(e) = role_repo.upsert(&role_id, &role.name, &guild_id).await {
                tracing::error!("Failed to upsert role {}: {:?}", role.name, e);
                continue;
            }
            synced_role_ids.push(role_id);
        }

        if let Err(e) = role_repo.delete_missing(&guild_id, &synced_role_ids).await {
            tracing::error!("Failed to prune deleted roles: {:?}", e);
        }

        // Fetch members from the API since guild.members may not be populated.
        // Requires the GUILD_MEMBERS privileged intent.
        let members = match ctx.http.get_guild_members(guild.id, None, None).await {
            Ok(members) => members,
            Err(e) => {
                tracing::error!("Failed to fetch guild members from API: {:?}", e);
                guild.members.values().cloned().collect()
            }
        };

        for member in &members {
            self.sync_member_roles(&member.user.id.get().to_string(), &member.roles)
                .await;
        }

        tracing::info!(
            "Synced {} roles and {} members for guild {}",
            synced_role_ids.len(),
            members.len(),
            guild.name
        );
    }

    /// Called when a role is created in a guild
    async fn guild_role_create(&self, _ctx: Context, new: Role) {
        let guild_id = new.guild_id.get().to_string();
        let role_repo = ServerRoleRepository::new(&self.db);

        if let Err(e) = role_repo
            .upsert(&new.id.get().to_string(), &new.name, &guild_id)
            .await
        {
            tracing::error!("Failed to upsert new role: {:?}", e);
        } else {
            tracing::info!("Created role {} in guild {}", new.name, guild_id);
        }
    }

    /// Called when a role is updated in a guild
    async fn guild_role_update(&self, _ctx: Context, _old: Option<Role>, new: Role) {
        let guild_id = new.guild_id.get().to_string();
        let role_repo = ServerRoleRepository::new(&self.db);

        if let Err(e) = role_repo
            .upsert(&new.id.get().to_string(), &new.name, &guild_id)
            .await
        {
            tracing::error!("Failed to upsert updated role: {:?}", e);
        } else {
            tracing::info!("Updated role {} in guild {}", new.name, guild_id);
        }
    }

    /// Called when a role is deleted from a guild
    async fn guild_role_delete(
        &self,
        _ctx: Context,
        guild_id: GuildId,
        removed_role_id: RoleId,
        _removed_role_data_if_in_cache: Option<Role>,
    ) {
        let role_repo = ServerRoleRepository::new(&self.db);

        if let Err(e) = role_repo.delete(&removed_role_id.get().to_string()).await {
            tracing::error!("Failed to delete role: {:?}", e);
        } else {
            tracing::info!("Deleted role {} from guild {}", removed_role_id, guild_id);
        }
    }

    /// Called when a member's roles or profile change
    async fn guild_member_update(
        &self,
        _ctx: Context,
        _old_if_available: Option<Member>,
        _new: Option<Member>,
        event: GuildMemberUpdateEvent,
    ) {
        self.sync_member_roles(&event.user.id.get().to_string(), &event.roles)
            .await;
    }
}

/// Starts the Discord bot in a blocking manner
///
/// Call from within a tokio::spawn task; it blocks until the bot shuts down.
///
/// # Arguments
/// - `config` - Application configuration containing the bot token
/// - `db` - Database connection for the bot to use
///
/// # Returns
/// - `Ok(())` if the bot starts and runs successfully
/// - `Err(AppError)` if bot initialization or connection fails
pub async fn start_bot(config: &Config, db: DatabaseConnection) -> Result<(), AppError> {
    // GUILD_MEMBERS is a privileged intent - must be enabled in the Discord
    // Developer Portal
    let intents = GatewayIntents::GUILDS | GatewayIntents::GUILD_MEMBERS;

    let handler = Handler { db };

    let mut client = Client::builder(&config.discord_bot_token, intents)
        .event_handler(handler)
        .await?;

    tracing::info!("Starting Discord bot...");

    client.start().await?;

    Ok(())
}
