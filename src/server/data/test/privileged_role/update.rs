use super::*;

/// Tests updating an existing role, including swapping its group snapshot.
///
/// Expected: Ok(Some) with all fields replaced
#[tokio::test]
async fn updates_existing_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PrivilegedRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::privileged_role::PrivilegedRoleFactory::new(db)
        .role_id("111")
        .role_name("Moderator")
        .whitelist_slots(1)
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = PrivilegedRoleRepository::new(db);
    let role = repo
        .update(
            "111",
            UpsertPrivilegedRoleParam {
                role_id: "111".to_string(),
                role_name: "Senior Moderator".to_string(),
                admin_group: Some(moderator_group()),
                active_days: vec![Weekday::Monday],
                whitelist_slots: 5,
                enabled: false,
            },
        )
        .await?;

    assert!(role.is_some());
    let role = role.unwrap();
    assert_eq!(role.role_name, "Senior Moderator");
    assert_eq!(role.whitelist_slots, 5);
    assert_eq!(role.active_days, vec![Weekday::Monday]);
    assert!(!role.enabled);
    assert!(role.admin_group.is_some());

    Ok(())
}

/// Tests updating a non-existent role.
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
    let role = repo
        .update(
            "999",
            UpsertPrivilegedRoleParam {
                role_id: "999".to_string(),
                role_name: "Ghost".to_string(),
                admin_group: None,
                active_days: vec![],
                whitelist_slots: 0,
                enabled: true,
            },
        )
        .await?;

    assert!(role.is_none());

    Ok(())
}
