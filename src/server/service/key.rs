//! API key generation and validation.

use rand::Rng;
use sea_orm::DatabaseConnection;

use crate::server::{
    data::api_key::ApiKeyRepository,
    error::AppError,
    model::key::ApiKey,
    service::audit::AuditService,
};

const KEY_LENGTH: usize = 32;
const KEY_CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

/// Generates a random alphanumeric key.
fn generate_key() -> String {
    let mut rng = rand::rng();

    (0..KEY_LENGTH)
        .map(|_| {
            let index = rng.random_range(0..KEY_CHARSET.len());
            KEY_CHARSET[index] as char
        })
        .collect()
}

pub struct ApiKeyService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ApiKeyService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Generates, persists, and returns a new API key.
    pub async fn create(&self, actor_name: &str) -> Result<ApiKey, AppError> {
        let key = ApiKeyRepository::new(self.db)
            .create(&generate_key())
            .await?;

        AuditService::new(self.db)
            .record(format!("{} generated a new API key", actor_name), "key")
            .await?;

        Ok(key)
    }

    /// Checks whether a presented key is known.
    pub async fn validate(&self, key: &str) -> Result<bool, AppError> {
        ApiKeyRepository::new(self.db).exists(key).await
    }

    pub async fn get_all(&self) -> Result<Vec<ApiKey>, AppError> {
        ApiKeyRepository::new(self.db).get_all().await
    }

    /// Revokes a key.
    ///
    /// # Returns
    /// - `Ok(true)` - Key existed and was revoked
    /// - `Ok(false)` - No such key
    pub async fn revoke(&self, key: &str, actor_name: &str) -> Result<bool, AppError> {
        let deleted = ApiKeyRepository::new(self.db).delete(key).await?;

        if deleted {
            AuditService::new(self.db)
                .record(format!("{} revoked an API key", actor_name), "key")
                .await?;
        }

        Ok(deleted)
    }
}
