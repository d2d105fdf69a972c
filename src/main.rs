mod model;
mod server;

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::CorsLayer;
use tracing_subscriber::EnvFilter;

use crate::server::{bot, config::Config, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;
    let session = startup::connect_to_session(&db).await?;
    let http_client = startup::setup_reqwest_client();
    let oauth_client = startup::setup_oauth_client(&config)?;

    let cors = CorsLayer::new()
        .allow_origin(config.app_url.parse::<HeaderValue>()?)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE])
        .allow_credentials(true);

    let app = router::router()
        .with_state(AppState::new(db.clone(), http_client, oauth_client))
        .layer(session)
        .layer(cors);

    let listener = tokio::net::TcpListener::bind(&config.listen_addr).await?;
    tracing::info!("Listening on {}", config.listen_addr);

    // The bot runs alongside the HTTP server and shares its pool
    tokio::spawn(async move {
        if let Err(e) = bot::start::start_bot(&config, db).await {
            tracing::error!("Discord bot error: {}", e);
        }
    });

    axum::serve(listener, app).await?;

    Ok(())
}
