use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use tower_sessions::Session;

use crate::{
    model::{
        api::ErrorDto,
        list::{ListEndpointDto, UpsertListEndpointDto},
    },
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::list::{ListEndpoint, UpsertListEndpointParam},
        service::list::ListService,
        state::AppState,
    },
};

pub static LIST_TAG: &str = "list";

/// Query parameters for the public list endpoint.
#[derive(Deserialize)]
pub struct PublicListParams {
    /// API key authorizing the game server to read the list.
    pub key: Option<String>,
}

#[utoipa::path(
    get,
    path = "/lists/{list_name}",
    tag = LIST_TAG,
    params(
        ("list_name" = String, Path, description = "Name of the list"),
        ("key" = Option<String>, Query, description = "API key")
    ),
    responses(
        (status = 200, description = "Plaintext remote admin list", body = String),
        (status = 401, description = "Missing or unknown API key", body = ErrorDto),
        (status = 404, description = "Unknown or disabled list", body = ErrorDto)
    ),
)]
pub async fn get_public_list(
    State(state): State<AppState>,
    Path(list_name): Path<String>,
    Query(params): Query<PublicListParams>,
) -> Result<impl IntoResponse, AppError> {
    let output = ListService::new(&state.db)
        .render(&list_name, params.key.as_deref())
        .await?;

    Ok((StatusCode::OK, output))
}

#[utoipa::path(
    get,
    path = "/api/lists",
    tag = LIST_TAG,
    responses(
        (status = 200, description = "All configured list endpoints", body = Vec<ListEndpointDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_lists(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let lists = ListService::new(&state.db).get_all().await?;
    let lists_dto: Vec<_> = lists.into_iter().map(ListEndpoint::into_dto).collect();

    Ok((StatusCode::OK, Json(lists_dto)))
}

#[utoipa::path(
    post,
    path = "/api/lists",
    tag = LIST_TAG,
    request_body = UpsertListEndpointDto,
    responses(
        (status = 201, description = "Successfully created list endpoint", body = ListEndpointDto),
        (status = 409, description = "A list with that name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn create_list(
    State(state): State<AppState>,
    session: Session,
    Json(payload): Json<UpsertListEndpointDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let list = ListService::new(&state.db)
        .create(
            UpsertListEndpointParam::from(payload),
            &authenticated.user.name,
        )
        .await?;

    Ok((StatusCode::CREATED, Json(list.into_dto())))
}

#[utoipa::path(
    put,
    path = "/api/lists/{list_name}",
    tag = LIST_TAG,
    params(
        ("list_name" = String, Path, description = "Current name of the list")
    ),
    request_body = UpsertListEndpointDto,
    responses(
        (status = 200, description = "Successfully updated list endpoint", body = ListEndpointDto),
        (status = 404, description = "No list with that name", body = ErrorDto),
        (status = 409, description = "A list with the new name already exists", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_list(
    State(state): State<AppState>,
    session: Session,
    Path(list_name): Path<String>,
    Json(payload): Json<UpsertListEndpointDto>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let list = ListService::new(&state.db)
        .update(
            &list_name,
            UpsertListEndpointParam::from(payload),
            &authenticated.user.name,
        )
        .await?;

    Ok((StatusCode::OK, Json(list.into_dto())))
}

#[utoipa::path(
    delete,
    path = "/api/lists/{list_name}",
    tag = LIST_TAG,
    params(
        ("list_name" = String, Path, description = "Name of the list to delete")
    ),
    responses(
        (status = 204, description = "Successfully deleted list endpoint"),
        (status = 404, description = "No list with that name", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn delete_list(
    State(state): State<AppState>,
    session: Session,
    Path(list_name): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let authenticated = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    ListService::new(&state.db)
        .delete(&list_name, &authenticated.user.name)
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
