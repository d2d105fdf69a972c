use super::*;

/// Tests listing all groups ordered by name.
///
/// Expected: Ok with groups sorted alphabetically
#[tokio::test]
async fn lists_groups_ordered_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::AdminGroup)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::admin_group::AdminGroupFactory::new(db)
        .group_name("Zulu")
        .build()
        .await
        .map_err(AppError::from)?;
    factory::admin_group::AdminGroupFactory::new(db)
        .group_name("Alpha")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = AdminGroupRepository::new(db);
    let groups = repo.get_all().await?;

    assert_eq!(groups.len(), 2);
    assert_eq!(groups[0].group_name, "Alpha");
    assert_eq!(groups[1].group_name, "Zulu");

    Ok(())
}
