use super::*;

/// Tests storing a new API key.
///
/// Expected: Ok with the key persisted
#[tokio::test]
async fn creates_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApiKeyRepository::new(db);
    let key = repo.create("abc123").await?;

    assert_eq!(key.key, "abc123");
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}

/// Tests that duplicate key values are rejected by the unique constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_key() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ApiKey)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ApiKeyRepository::new(db);
    repo.create("abc123").await?;
    let result = repo.create("abc123").await;

    assert!(result.is_err());

    Ok(())
}
