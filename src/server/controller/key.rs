use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, key::ApiKeyDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::key::ApiKey,
        service::key::ApiKeyService,
        state::AppState,
    },
};

pub static KEY_TAG: &str = "key";

#[utoipa::path(
    get,
    path = "/api/keys",
    tag = KEY_TAG,
    responses(
        (status = 200, description = "All API keys, newest first", body = Vec<ApiKeyDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_keys(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let keys = ApiKeyService::new(&state.db).get_all().await?;
    let keys_dto: Vec<_> = keys.into_iter().map(ApiKey::into_dto).collect();

    Ok((StatusCode::OK, Json(keys_dto)))
}

#[utoipa::path(
    post,
    path = "/api/keys",
    tag = KEY_TAG,
    responses(
        (status = 201, description = "Freshly generated API key", body = ApiKeyDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_key(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let key = ApiKeyService::new(&state.db)
        .create(&authenticated.user.name)
        .await?;

    Ok((StatusCode::CREATED, Json(key.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/keys/{key}",
    tag = KEY_TAG,
    params(
        ("key" = String, Path, description = "The key to revoke")
    ),
    responses(
        (status = 204, description = "Key revoked"),
        (status = 404, description = "No such key", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_key(
    State(state): State<AppState>,
    session: Session,
    Path(key): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let revoked = ApiKeyService::new(&state.db)
        .revoke(&key, &authenticated.user.name)
        .await?;

    if !revoked {
        return Err(AppError::NotFound("API key not found".to_string()));
    }

    Ok(StatusCode::NO_CONTENT)
}
