use super::*;

/// Tests creating a new admin group.
///
/// Verifies that the permissions survive the round trip through the JSON
/// column in their typed form.
///
/// Expected: Ok with group created and permissions intact
#[tokio::test]
async fn creates_group_with_permissions() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = AdminGroupRepository::new(db);
    let group = repo
        .create(UpsertAdminGroupParam {
            group_name: "Moderators".to_string(),
            permissions: vec![Permission::Kick, Permission::Ban],
            enabled: true,
            is_whitelist_group: false,
        })
        .await?;

    assert_eq!(group.group_name, "Moderators");
    assert_eq!(group.permissions, vec![Permission::Kick, Permission::Ban]);
    assert!(group.enabled);
    assert!(!group.is_whitelist_group);

    Ok(())
}

/// Tests that a duplicate group name is rejected by the unique constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_group_name() -> Result<(), AppError> {
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
    let result = repo
        .create(UpsertAdminGroupParam {
            group_name: "Moderators".to_string(),
            permissions: vec![Permission::Reserve],
            enabled: true,
            is_whitelist_group: false,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
