use super::*;

/// Tests creating a list endpoint with embedded group snapshots.
///
/// Expected: Ok with list created and snapshots intact
#[tokio::test]
async fn creates_list_with_snapshots() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ListEndpoint)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ListEndpointRepository::new(db);
    let list = repo
        .create(UpsertListEndpointParam {
            list_name: "whitelist".to_string(),
            admin_groups: vec![whitelist_group()],
            all_roles_enabled: false,
            use_whitelist_group: true,
            enabled: true,
        })
        .await?;

    assert_eq!(list.list_name, "whitelist");
    assert_eq!(list.admin_groups.len(), 1);
    assert_eq!(list.admin_groups[0].group_name, "Whitelist");
    assert!(list.use_whitelist_group);
    assert!(list.enabled);

    Ok(())
}

/// Tests that a duplicate list name is rejected by the unique constraint.
///
/// Expected: Err on the second insert
#[tokio::test]
async fn rejects_duplicate_list_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ListEndpoint)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::list_endpoint::ListEndpointFactory::new(db)
        .list_name("whitelist")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = ListEndpointRepository::new(db);
    let result = repo
        .create(UpsertListEndpointParam {
            list_name: "whitelist".to_string(),
            admin_groups: vec![],
            all_roles_enabled: false,
            use_whitelist_group: false,
            enabled: true,
        })
        .await;

    assert!(result.is_err());

    Ok(())
}
