//! Type-safe session management wrappers.
//!
//! Each struct wraps the same underlying `Session` but exposes only the
//! methods relevant to its concern, so session keys and value types are
//! defined in exactly one place.

use tower_sessions::Session;

use crate::server::error::AppError;

// Session key constants
const SESSION_AUTH_DISCORD_ID: &str = "auth:user";
const SESSION_AUTH_CSRF_TOKEN: &str = "auth:csrf_token";

/// Authentication session management.
///
/// Stores the authenticated user's Discord ID. Discord snowflakes are kept as
/// strings end to end; they exceed what JSON number handling can be trusted
/// with.
pub struct AuthSession<'a> {
    session: &'a Session,
}

impl<'a> AuthSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the user's Discord ID after a successful OAuth callback.
    ///
    /// # Returns
    /// - `Ok(())` - Discord ID successfully stored
    /// - `Err(AppError::SessionErr(_))` - Failed to store in session
    pub async fn set_discord_id(&self, discord_id: &str) -> Result<(), AppError> {
        self.session
            .insert(SESSION_AUTH_DISCORD_ID, discord_id.to_string())
            .await?;
        Ok(())
    }

    /// Retrieves the logged-in user's Discord ID.
    ///
    /// # Returns
    /// - `Ok(Some(discord_id))` - User is logged in
    /// - `Ok(None)` - No user in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn get_discord_id(&self) -> Result<Option<String>, AppError> {
        let discord_id = self.session.get::<String>(SESSION_AUTH_DISCORD_ID).await?;
        Ok(discord_id)
    }

    /// Clears all data from the session. Used during logout.
    pub async fn clear(&self) {
        self.session.clear().await;
    }
}

/// CSRF protection for the OAuth flow.
///
/// The token is stored when login starts and consumed during the callback;
/// each token validates at most once.
pub struct CsrfSession<'a> {
    session: &'a Session,
}

impl<'a> CsrfSession<'a> {
    pub fn new(session: &'a Session) -> Self {
        Self { session }
    }

    /// Stores the CSRF state generated for an OAuth authorize URL.
    pub async fn set_token(&self, token: String) -> Result<(), AppError> {
        self.session.insert(SESSION_AUTH_CSRF_TOKEN, token).await?;
        Ok(())
    }

    /// Retrieves and removes the CSRF token from the session.
    ///
    /// # Returns
    /// - `Ok(Some(token))` - Token was found and removed
    /// - `Ok(None)` - No token in session
    /// - `Err(AppError::SessionErr(_))` - Failed to access session
    pub async fn take_token(&self) -> Result<Option<String>, AppError> {
        let token = self.session.remove(SESSION_AUTH_CSRF_TOKEN).await?;
        Ok(token)
    }
}
