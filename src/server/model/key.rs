//! API key domain model.

use chrono::{DateTime, Utc};

use crate::model::key::ApiKeyDto;

#[derive(Debug, Clone, PartialEq)]
pub struct ApiKey {
    pub key: String,
    pub created_at: DateTime<Utc>,
}

impl ApiKey {
    pub fn from_entity(entity: entity::api_key::Model) -> Self {
        Self {
            key: entity.key,
            created_at: entity.created_at,
        }
    }

    pub fn into_dto(self) -> ApiKeyDto {
        ApiKeyDto {
            key: self.key,
            created_at: self.created_at,
        }
    }
}
