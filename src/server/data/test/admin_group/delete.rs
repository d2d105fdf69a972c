use super::*;

/// Tests deleting an existing group.
///
/// Expected: Ok(true) and the group is gone
#[tokio::test]
async fn deletes_existing_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin_group::AdminGroupFactory::new(db)
        .group_name("Moderators")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = AdminGroupRepository::new(db);
    let deleted = repo.delete("Moderators").await?;

    assert!(deleted);
    assert!(repo.find_by_name("Moderators").await?.is_none());

    Ok(())
}

/// Tests deleting a non-existent group.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminGroupRepository::new(db);
    let deleted = repo.delete("Nobody").await?;

    assert!(!deleted);

    Ok(())
}
