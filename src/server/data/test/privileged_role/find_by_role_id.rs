use super::*;

/// Tests finding an existing role by its Discord snowflake.
///
/// Expected: Ok(Some(PrivilegedRole))
#[tokio::test]
async fn finds_existing_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PrivilegedRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::privileged_role::PrivilegedRoleFactory::new(db)
        .role_id("111")
        .role_name("Moderator")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = PrivilegedRoleRepository::new(db);
    let role = repo.find_by_role_id("111").await?;

    assert!(role.is_some());
    assert_eq!(role.unwrap().role_name, "Moderator");

    Ok(())
}

/// Tests querying for a non-existent role.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PrivilegedRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PrivilegedRoleRepository::new(db);
    let role = repo.find_by_role_id("999").await?;

    assert!(role.is_none());

    Ok(())
}
