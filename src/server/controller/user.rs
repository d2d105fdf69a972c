use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        user::{DiscordUserDto, UpdateDiscordUserDto},
    },
    server::{
        data::discord_user::DiscordUserRepository,
        error::{validation::ValidationError, AppError},
        middleware::auth::{AuthGuard, Permission},
        model::user::{DiscordUser, UpdateUserParam},
        service::audit::AuditService,
        state::AppState,
        util::steam::is_valid_steam64_id,
    },
};

pub static USER_TAG: &str = "user";

#[utoipa::path(
    get,
    path = "/api/users",
    tag = USER_TAG,
    responses(
        (status = 200, description = "All linked users in insertion order", body = Vec<DiscordUserDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_users(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let users = DiscordUserRepository::new(&state.db).get_all().await?;
    let users_dto: Vec<_> = users.into_iter().map(DiscordUser::into_dto).collect();

    Ok((StatusCode::OK, Json(users_dto)))
}

#[utoipa::path(
    put,
    path = "/api/users/{discord_id}",
    tag = USER_TAG,
    params(
        ("discord_id" = String, Path, description = "Discord ID of the user")
    ),
    request_body = UpdateDiscordUserDto,
    responses(
        (status = 200, description = "Updated user", body = DiscordUserDto),
        (status = 400, description = "Malformed admin Steam ID", body = ErrorDto),
        (status = 404, description = "No user with that Discord ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user(
    State(state): State<AppState>,
    session: Session,
    Path(discord_id): Path<String>,
    Json(payload): Json<UpdateDiscordUserDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    if let Some(admin_steam_id) = payload.admin_steam_id.as_deref() {
        if !is_valid_steam64_id(admin_steam_id) {
            return Err(ValidationError::InvalidSteamId {
                steam_id: admin_steam_id.to_string(),
            }
            .into());
        }
    }

    let Some(user) = DiscordUserRepository::new(&state.db)
        .update(UpdateUserParam {
            discord_id: discord_id.clone(),
            enabled: payload.enabled,
            admin_steam_id: payload.admin_steam_id,
        })
        .await?
    else {
        return Err(AppError::NotFound(format!(
            "User '{}' not found",
            discord_id
        )));
    };

    AuditService::new(&state.db)
        .record(
            format!("{} updated user '{}'", authenticated.user.name, user.name),
            "user",
        )
        .await?;

    Ok((StatusCode::OK, Json(user.into_dto())))
}
