use super::*;

/// Tests updating an existing list, including its embedded snapshots.
///
/// Expected: Ok(Some) with all fields replaced
#[tokio::test]
async fn updates_existing_list() -> Result<(), AppError> {
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
    let list = repo
        .update(
            "admins",
            UpsertListEndpointParam {
                list_name: "staff".to_string(),
                admin_groups: vec![whitelist_group()],
                all_roles_enabled: true,
                use_whitelist_group: false,
                enabled: false,
            },
        )
        .await?;

    assert!(list.is_some());
    let list = list.unwrap();
    assert_eq!(list.list_name, "staff");
    assert_eq!(list.admin_groups.len(), 1);
    assert!(list.all_roles_enabled);
    assert!(!list.enabled);

    Ok(())
}

/// Tests updating a non-existent list.
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
    let list = repo
        .update(
            "ghosts",
            UpsertListEndpointParam {
                list_name: "ghosts".to_string(),
                admin_groups: vec![],
                all_roles_enabled: false,
                use_whitelist_group: false,
                enabled: true,
            },
        )
        .await?;

    assert!(list.is_none());

    Ok(())
}
