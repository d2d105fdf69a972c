//! Session-based authorization guard for protected endpoints.

use sea_orm::DatabaseConnection;
use tower_sessions::Session;

use crate::{
    model::permission,
    server::{
        data::discord_user::DiscordUserRepository,
        error::{auth::AuthError, AppError},
        middleware::session::AuthSession,
        model::{access::ResolvedAccess, user::DiscordUser},
        service::authorization::AccessService,
    },
};

/// Application-level permission an endpoint can require.
pub enum Permission {
    /// Admin console access: the user's resolved in-game permissions must
    /// include `manageserver`.
    Admin,
}

/// The authenticated caller along with their resolved access.
///
/// Resolution already happens during the guard's admin check, so controllers
/// get it for free instead of querying again.
pub struct AuthenticatedUser {
    pub user: DiscordUser,
    pub access: ResolvedAccess,
}

pub struct AuthGuard<'a> {
    db: &'a DatabaseConnection,
    session: &'a Session,
}

impl<'a> AuthGuard<'a> {
    pub fn new(db: &'a DatabaseConnection, session: &'a Session) -> Self {
        Self { db, session }
    }

    /// Authenticates the session and enforces the required permissions.
    ///
    /// Disabled accounts are rejected outright, before any permission check.
    ///
    /// # Returns
    /// - `Ok(AuthenticatedUser)` - Caller is logged in and meets every
    ///   requirement
    /// - `Err(AppError::AuthErr(_))` - Not logged in, account missing or
    ///   disabled, or a permission requirement failed
    pub async fn require(
        &self,
        permissions: &[Permission],
    ) -> Result<AuthenticatedUser, AppError> {
        let user_repo = DiscordUserRepository::new(self.db);
        let auth_session = AuthSession::new(self.session);

        let Some(discord_id) = auth_session.get_discord_id().await? else {
            return Err(AuthError::UserNotInSession.into());
        };

        let Some(user) = user_repo.find_by_discord_id(&discord_id).await? else {
            return Err(AuthError::UserNotInDatabase(discord_id).into());
        };

        if !user.enabled {
            return Err(AuthError::UserDisabled(discord_id).into());
        }

        let access = AccessService::new(self.db).resolve_for_user(&user).await?;

        for permission in permissions {
            match permission {
                Permission::Admin => {
                    if !access
                        .permissions
                        .contains(&permission::Permission::ManageServer)
                    {
                        return Err(AuthError::AccessDenied(
                            discord_id,
                            "User attempted to access an admin endpoint without the manageserver permission".to_string(),
                        )
                        .into());
                    }
                }
            }
        }

        Ok(AuthenticatedUser { user, access })
    }
}
