use super::*;

/// Tests disabling a user account.
///
/// Expected: Ok(Some) with the enabled flag cleared
#[tokio::test]
async fn disables_user() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_user::DiscordUserFactory::new(db)
        .discord_id("123456789")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = DiscordUserRepository::new(db);
    let user = repo
        .update(UpdateUserParam {
            discord_id: "123456789".to_string(),
            enabled: Some(false),
            admin_steam_id: None,
        })
        .await?;

    assert!(user.is_some());
    assert!(!user.unwrap().enabled);

    Ok(())
}

/// Tests linking an admin Steam ID without touching the enabled flag.
///
/// Verifies that `None` fields in the update are left unchanged.
///
/// Expected: Ok(Some) with Steam ID set and enabled flag preserved
#[tokio::test]
async fn sets_admin_steam_id_preserves_enabled() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_user::DiscordUserFactory::new(db)
        .discord_id("123456789")
        .enabled(false)
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = DiscordUserRepository::new(db);
    let user = repo
        .update(UpdateUserParam {
            discord_id: "123456789".to_string(),
            enabled: None,
            admin_steam_id: Some("76561198000000001".to_string()),
        })
        .await?
        .unwrap();

    assert_eq!(user.admin_steam_id.as_deref(), Some("76561198000000001"));
    assert!(!user.enabled);

    Ok(())
}

/// Tests updating a non-existent user.
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
    let user = repo
        .update(UpdateUserParam {
            discord_id: "999999999".to_string(),
            enabled: Some(false),
            admin_steam_id: None,
        })
        .await?;

    assert!(user.is_none());

    Ok(())
}
