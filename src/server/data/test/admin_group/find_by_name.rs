use super::*;

/// Tests finding an existing group by name.
///
/// Expected: Ok(Some(AdminGroup))
#[tokio::test]
async fn finds_existing_group() -> Result<(), AppError> {
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
    let group = repo.find_by_name("Moderators").await?;

    assert!(group.is_some());
    assert_eq!(group.unwrap().group_name, "Moderators");

    Ok(())
}

/// Tests querying for a non-existent group.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminGroupRepository::new(db);
    let group = repo.find_by_name("Nobody").await?;

    assert!(group.is_none());

    Ok(())
}
