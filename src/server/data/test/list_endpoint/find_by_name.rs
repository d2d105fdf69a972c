use super::*;

/// Tests finding an existing list by name.
///
/// Expected: Ok(Some(ListEndpoint))
#[tokio::test]
async fn finds_existing_list() -> Result<(), AppError> {
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
    let list = repo.find_by_name("admins").await?;

    assert!(list.is_some());
    assert_eq!(list.unwrap().list_name, "admins");

    Ok(())
}

/// Tests querying for a non-existent list.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_list() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ListEndpoint)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListEndpointRepository::new(db);
    let list = repo.find_by_name("ghosts").await?;

    assert!(list.is_none());

    Ok(())
}
