use super::*;

/// Tests checking for a stored key.
///
/// Expected: Ok(true) for a known key, Ok(false) for an unknown one
#[tokio::test]
async fn reports_key_presence() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::api_key::create_api_key_with_value(db, "abc123")
        .await
        .map_err(AppError::from)?;

    let repo = ApiKeyRepository::new(db);
    assert!(repo.exists("abc123").await?);
    assert!(!repo.exists("wrong").await?);

    Ok(())
}
