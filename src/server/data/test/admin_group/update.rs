use super::*;

/// Tests updating every field of an existing group.
///
/// Expected: Ok(Some) with all fields replaced
#[tokio::test]
async fn updates_existing_group() -> Result<(), AppError> {
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
    let group = repo
        .update(
            "Moderators",
            UpsertAdminGroupParam {
                group_name: "Senior Moderators".to_string(),
                permissions: vec![Permission::Kick, Permission::Ban, Permission::Immune],
                enabled: false,
                is_whitelist_group: false,
            },
        )
        .await?;

    assert!(group.is_some());
    let group = group.unwrap();
    assert_eq!(group.group_name, "Senior Moderators");
    assert_eq!(group.permissions.len(), 3);
    assert!(!group.enabled);

    Ok(())
}

/// Tests updating a non-existent group.
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
    let group = repo
        .update(
            "Nobody",
            UpsertAdminGroupParam {
                group_name: "Nobody".to_string(),
                permissions: vec![Permission::Reserve],
                enabled: true,
                is_whitelist_group: false,
            },
        )
        .await?;

    assert!(group.is_none());

    Ok(())
}
