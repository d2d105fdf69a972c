//! Audit log domain model.

use chrono::{DateTime, Utc};

use crate::model::log::LogEntryDto;

#[derive(Debug, Clone, PartialEq)]
pub struct LogEntry {
    pub message: String,
    pub message_type: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl LogEntry {
    pub fn from_entity(entity: entity::log_entry::Model) -> Self {
        Self {
            message: entity.message,
            message_type: entity.message_type,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> LogEntryDto {
        LogEntryDto {
            message: self.message,
            message_type: self.message_type,
            created_at: self.created_at,
        }
    }
}

/// Parameters for appending an audit record.
#[derive(Debug, Clone)]
pub struct CreateLogParam {
    pub message: String,
    pub message_type: Option<String>,
}
