use super::*;

/// Tests finding the distinguished whitelist group among several groups.
///
/// Expected: Ok(Some) with the flagged group
#[tokio::test]
async fn finds_flagged_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin_group::create_group(db)
        .await
        .map_err(AppError::from)?;
    factory::admin_group::create_whitelist_group(db)
        .await
        .map_err(AppError::from)?;

    let repo = AdminGroupRepository::new(db);
    let group = repo.find_whitelist_group().await?;

    assert!(group.is_some());
    let group = group.unwrap();
    assert!(group.is_whitelist_group);
    assert_eq!(group.group_name, "Whitelist");

    Ok(())
}

/// Tests the lookup when no group carries the whitelist flag.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_flagged_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin_group::create_group(db)
        .await
        .map_err(AppError::from)?;

    let repo = AdminGroupRepository::new(db);
    let group = repo.find_whitelist_group().await?;

    assert!(group.is_none());

    Ok(())
}
