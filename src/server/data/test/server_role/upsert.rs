use super::*;

/// Tests inserting a new guild role.
///
/// Expected: Ok with role created
#[tokio::test]
async fn creates_new_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRoleRepository::new(db);
    let role = repo.upsert("111", "Moderator", "1000").await?;

    assert_eq!(role.role_id, "111");
    assert_eq!(role.role_name, "Moderator");
    assert_eq!(role.guild_id, "1000");

    Ok(())
}

/// Tests that upserting a known role ID updates the name in place.
///
/// Expected: Ok with name updated and a single row in the table
#[tokio::test]
async fn updates_existing_role_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = ServerRoleRepository::new(db);
    repo.upsert("111", "Moderator", "1000").await?;
    let role = repo.upsert("111", "Senior Moderator", "1000").await?;

    assert_eq!(role.role_name, "Senior Moderator");
    assert_eq!(repo.get_all().await?.len(), 1);

    Ok(())
}
