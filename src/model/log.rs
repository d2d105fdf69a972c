//! Audit log DTOs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Deserialize, Clone, Debug, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct LogEntryDto {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message_type: Option<String>,
    pub created_at: DateTime<Utc>,
}
