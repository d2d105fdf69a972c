//! Audit log repository.

use chrono::Utc;
use sea_orm::{ActiveValue, DatabaseConnection, EntityTrait, QueryOrder, QuerySelect};

use crate::server::{
    error::AppError,
    model::log::{CreateLogParam, LogEntry},
};

/// Repository providing database operations for audit log entries.
pub struct LogRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> LogRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Appends an audit record.
    pub async fn create(&self, param: CreateLogParam) -> Result<LogEntry, AppError> {
        let now = Utc::now();

        let entity = entity::prelude::LogEntry::insert(entity::log_entry::ActiveModel {
            message: ActiveValue::Set(param.message),
            message_type: ActiveValue::Set(param.message_type),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        })
        .exec_with_returning(self.db)
        .await?;

        Ok(LogEntry::from_entity(entity))
    }

    /// Gets the most recent entries, newest first.
    pub async fn get_recent(&self, limit: u64) -> Result<Vec<LogEntry>, AppError> {
        let entities = entity::prelude::LogEntry::find()
            .order_by_desc(entity::log_entry::Column::Id)
            .limit(limit)
            .all(self.db)
            .await?;

        Ok(entities.into_iter().map(LogEntry::from_entity).collect())
    }
}
