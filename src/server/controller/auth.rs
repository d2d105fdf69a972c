use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, permission::Permission, user::AuthUserDto},
    server::{
        error::{auth::AuthError, AppError},
        middleware::{
            auth::AuthGuard,
            session::{AuthSession, CsrfSession},
        },
        service::auth::DiscordAuthService,
        state::AppState,
    },
};

pub static AUTH_TAG: &str = "auth";

/// Query parameters for the OAuth callback endpoint.
#[derive(Deserialize)]
pub struct CallbackParams {
    /// CSRF state token to be validated against the session value.
    pub state: String,
    /// Authorization code from Discord SSO for token exchange.
    pub code: String,
}

#[utoipa::path(
    get,
    path = "/api/auth/login",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Redirect to Discord's authorize page"),
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let auth_service = DiscordAuthService::new(&state);

    let (url, csrf_token) = auth_service.login_url();

    // Stored for verification during the callback
    CsrfSession::new(&session)
        .set_token(csrf_token.secret().to_string())
        .await?;

    Ok(Redirect::temporary(url.as_ref()))
}

#[utoipa::path(
    get,
    path = "/api/auth/callback",
    tag = AUTH_TAG,
    params(
        ("state" = String, Query, description = "CSRF state token"),
        ("code" = String, Query, description = "Discord authorization code")
    ),
    responses(
        (status = 307, description = "Login complete, redirect to the app"),
        (status = 400, description = "CSRF validation failed", body = ErrorDto),
        (status = 502, description = "Token exchange with Discord failed", body = ErrorDto)
    ),
)]
pub async fn callback(
    State(state): State<AppState>,
    session: Session,
    params: Query<CallbackParams>,
) -> Result<impl IntoResponse, AppError> {
    validate_csrf(&session, &params.0.state).await?;

    let user = DiscordAuthService::new(&state).callback(params.0.code).await?;

    AuthSession::new(&session)
        .set_discord_id(&user.discord_id)
        .await?;

    Ok(Redirect::temporary("/"))
}

#[utoipa::path(
    get,
    path = "/api/auth/logout",
    tag = AUTH_TAG,
    responses(
        (status = 307, description = "Session cleared, redirect to the app"),
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, AppError> {
    AuthSession::new(&session).clear().await;

    Ok(Redirect::temporary("/"))
}

#[utoipa::path(
    get,
    path = "/api/auth/user",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "The logged-in user", body = AuthUserDto),
        (status = 401, description = "Not logged in", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let is_admin = authenticated
        .access
        .permissions
        .contains(&Permission::ManageServer);

    Ok((
        StatusCode::OK,
        Json(AuthUserDto {
            discord_id: authenticated.user.discord_id,
            name: authenticated.user.name,
            is_admin,
        }),
    ))
}

async fn validate_csrf(session: &Session, csrf_state: &str) -> Result<(), AppError> {
    let stored_state = CsrfSession::new(session).take_token().await?;

    if let Some(state) = stored_state {
        if state == csrf_state {
            return Ok(());
        }
    }

    Err(AppError::AuthErr(AuthError::CsrfValidationFailed))
}
