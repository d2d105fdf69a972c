use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{
        api::{ErrorDto, SuccessDto},
        whitelist::{WhitelistProfileDto, WhitelistRowDto},
    },
    server::{
        error::AppError,
        middleware::auth::AuthGuard,
        model::{role::PrivilegedRole, user::WhitelistEntry},
        service::whitelist::WhitelistService,
        state::AppState,
    },
};

pub static WHITELIST_TAG: &str = "whitelist";

#[utoipa::path(
    get,
    path = "/api/profile/whitelist",
    tag = WHITELIST_TAG,
    responses(
        (status = 200, description = "The caller's whitelist profile", body = WhitelistProfileDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_whitelist_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let access = authenticated.access;

    let profile = WhitelistProfileDto {
        is_authenticated: true,
        whitelist_slots: access.whitelist_slots,
        whitelist_active_days: access.active_days.into_iter().collect(),
        valid_roles: access
            .valid_roles
            .into_iter()
            .map(PrivilegedRole::into_dto)
            .collect(),
        whitelisted_steam64_ids: authenticated
            .user
            .whitelist_entries
            .into_iter()
            .map(WhitelistEntry::into_dto)
            .collect(),
    };

    Ok((StatusCode::OK, Json(profile)))
}

#[utoipa::path(
    post,
    path = "/api/profile/whitelist",
    tag = WHITELIST_TAG,
    request_body = Vec<WhitelistRowDto>,
    responses(
        (status = 200, description = "Whitelist entries replaced", body = SuccessDto),
        (status = 400, description = "Malformed Steam ID or slot overrun", body = ErrorDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn submit_whitelist(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<Vec<WhitelistRowDto>>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let rows = payload.into_iter().map(WhitelistEntry::from_dto).collect();

    WhitelistService::new(&state.db)
        .submit(&authenticated.user, &authenticated.access, rows)
        .await?;

    Ok((StatusCode::OK, Json(SuccessDto { success: true })))
}
