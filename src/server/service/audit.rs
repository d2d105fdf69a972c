//! Audit trail for administrative mutations.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::log::LogRepository,
    error::AppError,
    model::log::{CreateLogParam, LogEntry},
};

/// Default number of entries returned by the log endpoint.
pub const DEFAULT_LOG_LIMIT: u64 = 200;

pub struct AuditService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuditService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit record describing a mutation.
    ///
    /// `message_type` groups related entries ("admingroup", "role", "list",
    /// "whitelist", "key", "user") so the log view can filter by concern.
    pub async fn record(
        &self,
        message: impl Into<String>,
        message_type: &str,
    ) -> Result<(), AppError> {
        LogRepository::new(self.db)
            .create(CreateLogParam {
                message: message.into(),
                message_type: Some(message_type.to_string()),
            })
            .await?;
        Ok(())
    }

    /// Fetches the most recent entries, newest first.
    pub async fn recent(&self, limit: u64) -> Result<Vec<LogEntry>, AppError> {
        LogRepository::new(self.db).get_recent(limit).await
    }
}
