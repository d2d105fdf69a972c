use super::*;

/// Tests creating a privileged role with an attached group snapshot.
///
/// Verifies that the snapshot and the active-day set survive the round trip
/// through their JSON columns.
///
/// Expected: Ok with role created and embedded data intact
#[tokio::test]
async fn creates_role_with_snapshot() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PrivilegedRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PrivilegedRoleRepository::new(db);
    let role = repo
        .create(UpsertPrivilegedRoleParam {
            role_id: "111".to_string(),
            role_name: "Moderator".to_string(),
            admin_group: Some(moderator_group()),
            active_days: vec![Weekday::Friday, Weekday::Saturday],
            whitelist_slots: 3,
            enabled: true,
        })
        .await?;

    assert_eq!(role.role_id, "111");
    assert_eq!(role.whitelist_slots, 3);
    assert_eq!(role.active_days, vec![Weekday::Friday, Weekday::Saturday]);
    let group = role.admin_group.unwrap();
    assert_eq!(group.group_name, "Moderators");
    assert_eq!(group.permissions, vec![Permission::Kick, Permission::Ban]);

    Ok(())
}

/// Tests creating a role without a group.
///
/// Expected: Ok with no embedded snapshot
#[tokio::test]
async fn creates_role_without_group() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PrivilegedRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = PrivilegedRoleRepository::new(db);
    let role = repo
        .create(UpsertPrivilegedRoleParam {
            role_id: "222".to_string(),
            role_name: "Supporter".to_string(),
            admin_group: None,
            active_days: vec![Weekday::Sunday],
            whitelist_slots: 1,
            enabled: true,
        })
        .await?;

    assert!(role.admin_group.is_none());

    Ok(())
}
