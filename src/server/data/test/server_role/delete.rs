use super::*;

/// Tests deleting a guild role by Discord role ID.
///
/// Expected: Ok with the role removed
#[tokio::test]
async fn deletes_role() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::ServerRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::server_role::ServerRoleFactory::new(db)
        .role_id("111")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = ServerRoleRepository::new(db);
    repo.delete("111").await?;

    assert!(repo.get_all().await?.is_empty());

    Ok(())
}
