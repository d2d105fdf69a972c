use super::*;

/// Tests listing all roles ordered by name.
///
/// Expected: Ok with roles sorted alphabetically
#[tokio::test]
async fn lists_roles_ordered_by_name() -> Result<(), AppError> {
    let test = TestBuilder::new()
        .with_table(entity::prelude::PrivilegedRole)
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::privileged_role::PrivilegedRoleFactory::new(db)
        .role_id("111")
        .role_name("Zealots")
        .build()
        .await
        .map_err(AppError::from)?;
    factory::privileged_role::PrivilegedRoleFactory::new(db)
        .role_id("222")
        .role_name("Admins")
        .build()
        .await
        .map_err(AppError::from)?;

    let repo = PrivilegedRoleRepository::new(db);
    let roles = repo.get_all().await?;

    assert_eq!(roles.len(), 2);
    assert_eq!(roles[0].role_name, "Admins");
    assert_eq!(roles[1].role_name, "Zealots");

    Ok(())
}
