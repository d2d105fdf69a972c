use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use tower_sessions::Session;

use crate::{
    model::{
        admin_group::{AdminGroupDto, PermissionInfoDto, UpsertAdminGroupDto},
        api::ErrorDto,
        permission::Permission as GamePermission,
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::admin_group::{AdminGroup, UpsertAdminGroupParam},
        service::admin_group::AdminGroupService,
        state::AppState,
    },
};

pub static ADMIN_GROUP_TAG: &str = "admingroup";

#[utoipa::path(
    get,
    path = "/api/admingroups",
    tag = ADMIN_GROUP_TAG,
    responses(
        (status = 200, description = "All admin groups", body = Vec<AdminGroupDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_admin_groups(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session).require(&[]).await?;

    let groups = AdminGroupService::new(&state.db).get_all().await?;
    let groups_dto: Vec<_> = groups.into_iter().map(AdminGroup::into_dto).collect();

    Ok((StatusCode::OK, Json(groups_dto)))
}

#[utoipa::path(
    get,
    path = "/api/admingroups/permissions",
    tag = ADMIN_GROUP_TAG,
    responses(
        (status = 200, description = "The permission catalog with descriptions", body = Vec<PermissionInfoDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto)
    ),
)]
pub async fn get_permission_catalog(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let catalog: Vec<_> = GamePermission::ALL
        .into_iter()
        .map(|permission| PermissionInfoDto {
            permission,
            description: permission.description().to_string(),
        })
        .collect();

    Ok((StatusCode::OK, Json(catalog)))
}

#[utoipa::path(
    post,
    path = "/api/admingroups",
    tag = ADMIN_GROUP_TAG,
    request_body = UpsertAdminGroupDto,
    responses(
        (status = 201, description = "Successfully created admin group", body = AdminGroupDto),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 409, description = "Group name taken or second whitelist group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_admin_group(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertAdminGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let group = AdminGroupService::new(&state.db)
        .create(
            UpsertAdminGroupParam::from(payload),
            &authenticated.user.name,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(group.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/admingroups/{group_name}",
    tag = ADMIN_GROUP_TAG,
    params(
        ("group_name" = String, Path, description = "Current name of the group")
    ),
    request_body = UpsertAdminGroupDto,
    responses(
        (status = 200, description = "Successfully updated admin group", body = AdminGroupDto),
        (status = 404, description = "No group with that name", body = ErrorDto),
        (status = 409, description = "Group name taken or second whitelist group", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_admin_group(
    State(state): State<AppState>,
    session: Session,
    Path(group_name): Path<String>,
    Json(payload): Json<UpsertAdminGroupDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let group = AdminGroupService::new(&state.db)
        .update(
            &group_name,
            UpsertAdminGroupParam::from(payload),
            &authenticated.user.name,
        )
        .await?;

    Ok((StatusCode::OK, Json(group.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/admingroups/{group_name}",
    tag = ADMIN_GROUP_TAG,
    params(
        ("group_name" = String, Path, description = "Name of the group to delete")
    ),
    responses(
        (status = 204, description = "Successfully deleted admin group"),
        (status = 404, description = "No group with that name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_admin_group(
    State(state): State<AppState>,
    session: Session,
    Path(group_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    AdminGroupService::new(&state.db)
        .delete(&group_name, &authenticated.user.name)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
