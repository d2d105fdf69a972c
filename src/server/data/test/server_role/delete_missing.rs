use super::*;

/// Tests pruning roles not present in the keep set.
///
/// Verifies that only roles of the given guild outside the keep set are
/// deleted; other guilds are untouched.
///
/// Expected: Ok with the stale role removed and the rest intact
#[tokio::test]
async fn prunes_stale_roles() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server_role::ServerRoleFactory::new(db)
        .role_id("111")
        .guild_id("1000")
        .build()
        .await
        .map_err(AppError::from)?;
    factory::server_role::ServerRoleFactory::new(db)
        .role_id("222")
        .guild_id("1000")
        .build()
        .await
        .map_err(AppError::from)?;
    factory::server_role::ServerRoleFactory::new(db)
        .role_id("333")
        .guild_id("2000")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = ServerRoleRepository::new(db);
    repo.delete_missing("1000", &["111".to_string()]).await?;

    let remaining = repo.get_all().await?;
    let ids: Vec<&str> = remaining.iter().map(|r| r.role_id.as_str()).collect();
    assert_eq!(remaining.len(), 2);
    assert!(ids.contains(&"111"));
    assert!(ids.contains(&"333"));

    Ok(())
}

/// Tests pruning with an empty keep set.
///
/// Expected: Ok with every role of the guild removed
#[tokio::test]
async fn empty_keep_set_clears_guild() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server_role::ServerRoleFactory::new(db)
        .role_id("111")
        .guild_id("1000")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = ServerRoleRepository::new(db);
    repo.delete_missing("1000", &[]).await?;

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
