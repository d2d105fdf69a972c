//! Discord OAuth2 login flow.

use oauth2::{
    basic::BasicTokenType, AuthorizationCode, CsrfToken, EmptyExtraTokenFields,
    StandardTokenResponse, TokenResponse,
};
use sea_orm::DatabaseConnection;
use serenity::all::User;
use url::Url;

use crate::server::{
    data::discord_user::DiscordUserRepository,
    error::{auth::AuthError, AppError},
    model::user::{DiscordUser, UpsertUserParam},
    state::{AppState, OAuth2Client},
};

pub struct DiscordAuthService<'a> {
    db: &'a DatabaseConnection,
    oauth_client: &'a OAuth2Client,
    http_client: &'a reqwest::Client,
}

impl<'a> DiscordAuthService<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self {
            db: &state.db,
            oauth_client: &state.oauth_client,
            http_client: &state.http_client,
        }
    }

    /// Builds the Discord authorize URL with a fresh CSRF state token.
    ///
    /// The returned token must be stored in the session and compared during
    /// the callback.
    pub fn login_url(&self) -> (Url, CsrfToken) {
        let (authorize_url, csrf_state) = self
            .oauth_client
            .authorize_url(CsrfToken::new_random)
            .add_scope(oauth2::Scope::new("identify".to_string()))
            .url();

        (authorize_url, csrf_state)
    }

    /// Completes the OAuth flow: exchanges the authorization code, fetches
    /// the Discord identity, and upserts the linked user.
    ///
    /// # Returns
    /// - `Ok(DiscordUser)` - The logged-in user record
    /// - `Err(AppError::AuthErr(TokenExchangeFailed))` - Discord rejected the
    ///   code exchange
    pub async fn callback(&self, authorization_code: String) -> Result<DiscordUser, AppError> {
        let user_repo = DiscordUserRepository::new(self.db);

        let auth_code = AuthorizationCode::new(authorization_code);

        let token = self
            .oauth_client
            .exchange_code(auth_code)
            .request_async(self.http_client)
            .await
            .map_err(|e| AuthError::TokenExchangeFailed(e.to_string()))?;

        let discord_user = self.fetch_discord_user(&token).await?;

        let name = discord_user
            .global_name
            .clone()
            .unwrap_or_else(|| discord_user.name.clone());

        let user = user_repo
            .upsert(UpsertUserParam {
                discord_id: discord_user.id.to_string(),
                name,
            })
            .await?;

        Ok(user)
    }

    /// Retrieves a Discord user's information using the provided access token
    async fn fetch_discord_user(
        &self,
        token: &StandardTokenResponse<EmptyExtraTokenFields, BasicTokenType>,
    ) -> Result<User, AppError> {
        let access_token = token.access_token().secret();

        let user_info = self
            .http_client
            .get("https://discord.com/api/users/@me")
            .header("Authorization", format!("Bearer {}", access_token))
            .send()
            .await?
            .json::<User>()
            .await?;

        Ok(user_info)
    }
}
