use super::*;

/// Tests deleting an existing list.
///
/// Expected: Ok(true) and the list is gone
#[tokio::test]
async fn deletes_existing_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ListEndpoint)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::list_endpoint::ListEndpointFactory::new(db)
        .list_name("admins")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = ListEndpointRepository::new(db);
    let deleted = repo.delete("admins").await?;

    assert!(deleted);
    assert!(repo.find_by_name("admins").await?.is_none());

    Ok(())
}

/// Tests deleting a non-existent list.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ListEndpoint)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListEndpointRepository::new(db);
    let deleted = repo.delete("ghosts").await?;

    assert!(!deleted);

    Ok(())
}
