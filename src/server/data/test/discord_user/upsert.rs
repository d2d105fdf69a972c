use super::*;

/// Tests creating a new user on first login.
///
/// Verifies that the repository creates a user record with the given Discord
/// ID and name, no roles, no whitelist entries, and an enabled account.
///
/// Expected: Ok with user created and defaults applied
#[tokio::test]
async fn creates_new_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let repo = DiscordUserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            name: "TestUser".to_string(),
        })
        .await?;

    assert_eq!(user.discord_id, "123456789");
    assert_eq!(user.name, "TestUser");
    assert!(user.roles.is_empty());
    assert!(user.whitelist_entries.is_empty());
    assert!(user.admin_steam_id.is_none());
    assert!(user.enabled);

    Ok(())
}

/// Tests updating an existing user's name on a returning login.
///
/// Verifies that when upserting a known Discord ID, the display name is
/// refreshed but roles, whitelist entries, and the enabled flag are left
/// untouched.
///
/// Expected: Ok with name updated and everything else preserved
#[tokio::test]
async fn returning_login_updates_name_only() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_user::DiscordUserFactory::new(db)
        .discord_id("123456789")
        .name("OldName")
        .roles(vec!["111".to_string()])
        .enabled(false)
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = DiscordUserRepository::new(db);
    let user = repo
        .upsert(UpsertUserParam {
            discord_id: "123456789".to_string(),
            name: "NewName".to_string(),
        })
        .await?;

    assert_eq!(user.name, "NewName");
    assert_eq!(user.roles, vec!["111".to_string()]);
    assert!(!user.enabled);

    Ok(())
}
