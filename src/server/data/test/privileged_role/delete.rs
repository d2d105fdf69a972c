use super::*;

/// Tests deleting an existing role.
///
/// Expected: Ok(true) and the role is gone
#[tokio::test]
async fn deletes_existing_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PrivilegedRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::privileged_role::PrivilegedRoleFactory::new(db)
        .role_id("111")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = PrivilegedRoleRepository::new(db);
    let deleted = repo.delete("111").await?;

    assert!(deleted);
    assert!(repo.find_by_role_id("111").await?.is_none());

    Ok(())
}

/// Tests deleting a non-existent role.
///
/// Expected: Ok(false)
#[tokio::test]
async fn returns_false_for_nonexistent_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PrivilegedRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PrivilegedRoleRepository::new(db);
    let deleted = repo.delete("999").await?;

    assert!(!deleted);

    Ok(())
}
