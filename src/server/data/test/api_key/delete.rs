use super::*;

/// Tests revoking an existing key.
///
/// Expected: Ok(true) and the key no longer validates
#[tokio::test]
async fn deletes_existing_key() -> Result<(), AppError> {
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
    let deleted = repo.delete("abc123").await?;

    assert!(deleted);
    assert!(!repo.exists("abc123").await?);

    Ok(())
}

/// Tests revoking a non-existent key.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApiKeyRepository::new(db);
    let deleted = repo.delete("ghost").await?;

    assert!(!deleted);

    Ok(())
}
