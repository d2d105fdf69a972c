use super::*;

/// Tests replacing a user's whitelist entries.
///
/// Verifies that a new submission replaces the previous rows wholesale and
/// that optional row labels survive the round trip through the JSON column.
///
/// Expected: Ok with only the new rows stored
#[tokio::test]
async fn replaces_entries_wholesale() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_user::DiscordUserFactory::new(db)
        .discord_id("123456789")
        .whitelist_entries(serde_json::json!([
            factory::helpers::whitelist_row("76561198000000001", None)
        ]))
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = DiscordUserRepository::new(db);
    repo.update_whitelist_entries(
        "123456789",
        &[
            WhitelistEntry {
                steam_id: "76561198000000002".to_string(),
                name: Some("Friend".to_string()),
            },
            WhitelistEntry {
                steam_id: "76561198000000003".to_string(),
                name: None,
            },
        ],
    )
    .await?;

    let user = repo.find_by_discord_id("123456789").await?.unwrap();
    assert_eq!(user.whitelist_entries.len(), 2);
    assert_eq!(user.whitelist_entries[0].steam_id, "76561198000000002");
    assert_eq!(user.whitelist_entries[0].name.as_deref(), Some("Friend"));
    assert_eq!(user.whitelist_entries[1].steam_id, "76561198000000003");
    assert!(user.whitelist_entries[1].name.is_none());

    Ok(())
}

/// Tests clearing whitelist entries with an empty submission.
///
/// Expected: Ok with no rows stored
#[tokio::test]
async fn clears_entries_with_empty_set() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::DiscordUser)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::discord_user::DiscordUserFactory::new(db)
        .discord_id("123456789")
        .whitelist_entries(serde_json::json!([
            factory::helpers::whitelist_row("76561198000000001", None)
        ]))
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = DiscordUserRepository::new(db);
    repo.update_whitelist_entries("123456789", &[]).await?;

    let user = repo.find_by_discord_id("123456789").await?.unwrap();
    assert!(user.whitelist_entries.is_empty());

    Ok(())
}
