use super::*;

/// Tests finding an existing user by Discord ID.
///
/// Expected: Ok(Some(DiscordUser)) with matching user data
#[tokio::test]
async fn finds_existing_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_user::DiscordUserFactory::new(db)
        .discord_id("123456789")
        .name("TestUser")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = DiscordUserRepository::new(db);
    let user = repo.find_by_discord_id("123456789").await?;

    assert!(user.is_some());
    let user = user.unwrap();
    assert_eq!(user.discord_id, "123456789");
    assert_eq!(user.name, "TestUser");

    Ok(())
}

/// Tests querying for a non-existent user.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_nonexistent_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordUserRepository::new(db);
    let user = repo.find_by_discord_id("999999999").await?;

    assert!(user.is_none());

    Ok(())
}
