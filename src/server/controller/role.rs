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
        role::{PrivilegedRoleDto, ServerRoleDto, UpsertPrivilegedRoleDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::role::{PrivilegedRole, ServerRole, UpsertPrivilegedRoleParam},
        service::role::PrivilegedRoleService,
        state::AppState,
    },
};

pub static ROLE_TAG: &str = "role";

#[utoipa::path(
    get,
    path = "/api/roles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "All privileged roles", body = Vec<PrivilegedRoleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let roles = PrivilegedRoleService::new(&state.db).get_all().await?;
    let roles_dto: Vec<_> = roles.into_iter().map(PrivilegedRole::into_dto).collect();

    Ok((StatusCode::OK, Json(roles_dto)))
}

#[utoipa::path(
    get,
    path = "/api/serverroles",
    tag = ROLE_TAG,
    responses(
        (status = 200, description = "Guild roles known via bot sync", body = Vec<ServerRoleDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_server_roles(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let roles = PrivilegedRoleService::new(&state.db)
        .get_server_roles()
        .await?;
    let roles_dto: Vec<_> = roles.into_iter().map(ServerRole::into_dto).collect();

    Ok((StatusCode::OK, Json(roles_dto)))
}

#[utoipa::path(
    post,
    path = "/api/roles",
    tag = ROLE_TAG,
    request_body = UpsertPrivilegedRoleDto,
    responses(
        (status = 201, description = "Successfully created privileged role", body = PrivilegedRoleDto),
        (status = 409, description = "A mapping for that role ID already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_role(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertPrivilegedRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = PrivilegedRoleService::new(&state.db)
        .create(
            UpsertPrivilegedRoleParam::from(payload),
            &authenticated.user.name,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(role.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/roles/{role_id}",
    tag = ROLE_TAG,
    params(
        ("role_id" = String, Path, description = "Discord role ID of the mapping")
    ),
    request_body = UpsertPrivilegedRoleDto,
    responses(
        (status = 200, description = "Successfully updated privileged role", body = PrivilegedRoleDto),
        (status = 404, description = "No mapping for that role ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_role(
    State(state): State<AppState>,
    session: Session,
    Path(role_id): Path<String>,
    Json(payload): Json<UpsertPrivilegedRoleDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let role = PrivilegedRoleService::new(&state.db)
        .update(
            &role_id,
            UpsertPrivilegedRoleParam::from(payload),
            &authenticated.user.name,
        )
        .await?;

    Ok((StatusCode::OK, Json(role.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/roles/{role_id}",
    tag = ROLE_TAG,
    params(
        ("role_id" = String, Path, description = "Discord role ID of the mapping")
    ),
    responses(
        (status = 204, description = "Successfully deleted privileged role"),
        (status = 404, description = "No mapping for that role ID", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_role(
    State(state): State<AppState>,
    session: Session,
    Path(role_id): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    PrivilegedRoleService::new(&state.db)
        .delete(&role_id, &authenticated.user.name)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
