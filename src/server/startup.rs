use oauth2::{basic::BasicClient, AuthUrl, ClientId, ClientSecret, RedirectUrl, TokenUrl};
use sea_orm::DatabaseConnection;
use time::Duration;
use tower_sessions::{Expiry, SessionManagerLayer};
use tower_sessions_sqlx_store::SqliteStore;

use crate::server::{
    config::Config,
    error::{config::ConfigError, AppError},
    state::OAuth2Client,
};

/// Connects to the Sqlite database and runs pending migrations.
///
/// # Arguments
/// - `config` - Application configuration containing the database URL
///
/// # Returns
/// - `Ok(DatabaseConnection)` - Connected database with migrations applied
/// - `Err(AppError)` - Failed to connect to database or run migrations
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, AppError> {
    use migration::{Migrator, MigratorTrait};
    use sea_orm::{ConnectOptions, Database};

    let mut opt = ConnectOptions::new(&config.database_url);
    opt.sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    Ok(db)
}

/// Creates the session layer backed by the same Sqlite database.
///
/// Sessions expire after 30 days of inactivity.
///
/// # Returns
/// - `Ok(SessionManagerLayer)` - Ready to attach to the router
/// - `Err(AppError)` - Failed to create the session table
pub async fn connect_to_session(
    db: &DatabaseConnection,
) -> Result<SessionManagerLayer<SqliteStore>, AppError> {
    let pool = db.get_sqlite_connection_pool().clone();

    let session_store = SqliteStore::new(pool);
    session_store
        .migrate()
        .await
        .map_err(|e| AppError::InternalError(format!("Failed to migrate session store: {}", e)))?;

    let session_layer = SessionManagerLayer::new(session_store)
        .with_secure(false)
        .with_expiry(Expiry::OnInactivity(Duration::days(30)));

    Ok(session_layer)
}

/// Creates the HTTP client used for Discord REST calls.
///
/// Redirects are disabled; every URL this client talks to is known up front.
pub fn setup_reqwest_client() -> reqwest::Client {
    reqwest::ClientBuilder::new()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Builds the OAuth2 client for the Discord authorization code flow.
///
/// # Returns
/// - `Ok(OAuth2Client)` - Configured client
/// - `Err(AppError::ConfigErr(_))` - One of the configured URLs failed to
///   parse
pub fn setup_oauth_client(config: &Config) -> Result<OAuth2Client, AppError> {
    let auth_url = AuthUrl::new(config.discord_auth_url.clone())
        .map_err(|_| ConfigError::InvalidUrl(config.discord_auth_url.clone()))?;
    let token_url = TokenUrl::new(config.discord_token_url.clone())
        .map_err(|_| ConfigError::InvalidUrl(config.discord_token_url.clone()))?;
    let redirect_url = RedirectUrl::new(config.discord_redirect_url.clone())
        .map_err(|_| ConfigError::InvalidUrl(config.discord_redirect_url.clone()))?;

    let client = BasicClient::new(ClientId::new(config.discord_client_id.clone()))
        .set_client_secret(ClientSecret::new(config.discord_client_secret.clone()))
        .set_auth_uri(auth_url)
        .set_token_uri(token_url)
        .set_redirect_uri(redirect_url);

    Ok(client)
}
