//! Admin group management.

use sea_orm::DatabaseConnection;

use crate::{
    model::permission::Permission,
    server::{
        data::admin_group::AdminGroupRepository,
        error::{validation::ValidationError, AppError},
        model::admin_group::{AdminGroup, UpsertAdminGroupParam},
        service::audit::AuditService,
    },
};

/// Collapses duplicate permissions and orders them by catalog position.
///
/// Stored permission sets have set semantics; submitting `["kick","kick"]`
/// yields the same record as `["kick"]`.
fn normalize_permissions(permissions: &mut Vec<Permission>) {
    permissions.sort_unstable();
    permissions.dedup();
}

pub struct AdminGroupService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AdminGroupService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<AdminGroup>, AppError> {
        AdminGroupRepository::new(self.db).get_all().await
    }

    /// Creates a new admin group.
    ///
    /// Rejects duplicate names and enforces that at most one group carries
    /// the whitelist-group flag. Permissions are already catalog-checked by
    /// serde before the request body reaches this point.
    pub async fn create(
        &self,
        mut param: UpsertAdminGroupParam,
        actor_name: &str,
    ) -> Result<AdminGroup, AppError> {
        normalize_permissions(&mut param.permissions);

        let repo = AdminGroupRepository::new(self.db);

        if repo.find_by_name(&param.group_name).await?.is_some() {
            return Err(ValidationError::DuplicateGroupName(param.group_name).into());
        }

        if param.is_whitelist_group {
            self.reject_second_whitelist_group(&repo, &param.group_name)
                .await?;
        }

        let group = repo.create(param).await?;

        AuditService::new(self.db)
            .record(
                format!("{} created admin group '{}'", actor_name, group.group_name),
                "admingroup",
            )
            .await?;

        Ok(group)
    }

    /// Updates an existing admin group.
    ///
    /// # Returns
    /// - `Ok(AdminGroup)` - The updated group
    /// - `Err(AppError::NotFound)` - No group with that name
    /// - `Err(AppError::ValidationErr(_))` - Rename collision or second
    ///   whitelist group
    pub async fn update(
        &self,
        group_name: &str,
        mut param: UpsertAdminGroupParam,
        actor_name: &str,
    ) -> Result<AdminGroup, AppError> {
        normalize_permissions(&mut param.permissions);

        let repo = AdminGroupRepository::new(self.db);

        if param.group_name != group_name
            && repo.find_by_name(&param.group_name).await?.is_some()
        {
            return Err(ValidationError::DuplicateGroupName(param.group_name).into());
        }

        if param.is_whitelist_group {
            self.reject_second_whitelist_group(&repo, group_name).await?;
        }

        let Some(group) = repo.update(group_name, param).await? else {
            return Err(AppError::NotFound(format!(
                "Admin group '{}' not found",
                group_name
            )));
        };

        AuditService::new(self.db)
            .record(
                format!("{} updated admin group '{}'", actor_name, group.group_name),
                "admingroup",
            )
            .await?;

        Ok(group)
    }

    /// Deletes an admin group by name.
    ///
    /// Snapshots embedded in privileged roles and list endpoints are
    /// unaffected; they are copies by value.
    pub async fn delete(&self, group_name: &str, actor_name: &str) -> Result<(), AppError> {
        let deleted = AdminGroupRepository::new(self.db).delete(group_name).await?;

        if !deleted {
            return Err(AppError::NotFound(format!(
                "Admin group '{}' not found",
                group_name
            )));
        }

        AuditService::new(self.db)
            .record(
                format!("{} deleted admin group '{}'", actor_name, group_name),
                "admingroup",
            )
            .await?;

        Ok(())
    }

    /// Fails if a whitelist group other than `updating_name` already exists.
    async fn reject_second_whitelist_group(
        &self,
        repo: &AdminGroupRepository<'_>,
        updating_name: &str,
    ) -> Result<(), AppError> {
        if let Some(existing) = repo.find_whitelist_group().await? {
            if existing.group_name != updating_name {
                return Err(
                    ValidationError::WhitelistGroupAlreadyExists(existing.group_name).into(),
                );
            }
        }
        Ok(())
    }
}
