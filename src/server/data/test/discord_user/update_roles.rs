use super::*;

/// Tests replacing a user's stored role-ID set.
///
/// Verifies that the new set replaces the old one wholesale rather than
/// merging with it.
///
/// Expected: Ok with only the new role IDs stored
#[tokio::test]
async fn replaces_role_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_user::DiscordUserFactory::new(db)
        .discord_id("123456789")
        .roles(vec!["111".to_string(), "222".to_string()])
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = DiscordUserRepository::new(db);
    repo.update_roles("123456789", &["333".to_string()]).await?;

    let user = repo.find_by_discord_id("123456789").await?.unwrap();
    assert_eq!(user.roles, vec!["333".to_string()]);

    Ok(())
}

/// Tests clearing a user's roles with an empty set.
///
/// Expected: Ok with no roles stored
#[tokio::test]
async fn clears_roles_with_empty_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_user::DiscordUserFactory::new(db)
        .discord_id("123456789")
        .roles(vec!["111".to_string()])
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = DiscordUserRepository::new(db);
    repo.update_roles("123456789", &[]).await?;

    let user = repo.find_by_discord_id("123456789").await?.unwrap();
    assert!(user.roles.is_empty());

    Ok(())
}
