use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use tower_sessions::Session;

use crate::{
    model::{api::ErrorDto, log::LogEntryDto},
    server::{
        error::AppError,
        middleware::auth::{AuthGuard, Permission},
        model::log::LogEntry,
        service::audit::{AuditService, DEFAULT_LOG_LIMIT},
        state::AppState,
    },
};

pub static LOG_TAG: &str = "log";

#[utoipa::path(
    get,
    path = "/api/logs",
    tag = LOG_TAG,
    responses(
        (status = 200, description = "Most recent audit entries, newest first", body = Vec<LogEntryDto>),
        (status = 401, description = "User not authenticated", body = ErrorDto),
        (status = 403, description = "User is not an admin", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_logs(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, AppError> {
    let _ = AuthGuard::new(&state.db, &session)
        .require(&[Permission::Admin])
        .await?;

    let entries = AuditService::new(&state.db).recent(DEFAULT_LOG_LIMIT).await?;
    let entries_dto: Vec<_> = entries.into_iter().map(LogEntry::into_dto).collect();

    Ok((StatusCode::OK, Json(entries_dto)))
}
