//! Privileged role management.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::{privileged_role::PrivilegedRoleRepository, server_role::ServerRoleRepository},
    error::{validation::ValidationError, AppError},
    model::role::{PrivilegedRole, ServerRole, UpsertPrivilegedRoleParam},
    service::audit::AuditService,
};

pub struct PrivilegedRoleService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PrivilegedRoleService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<PrivilegedRole>, AppError> {
        PrivilegedRoleRepository::new(self.db).get_all().await
    }

    /// Guild roles known via the bot's sync, for the role picker.
    pub async fn get_server_roles(&self) -> Result<Vec<ServerRole>, AppError> {
        ServerRoleRepository::new(self.db).get_all().await
    }

    /// Creates a new privileged role mapping.
    ///
    /// Weekdays and the embedded group's permissions are already range- and
    /// catalog-checked by serde.
    pub async fn create(
        &self,
        param: UpsertPrivilegedRoleParam,
        actor_name: &str,
    ) -> Result<PrivilegedRole, AppError> {
        let repo = PrivilegedRoleRepository::new(self.db);

        if repo.find_by_role_id(&param.role_id).await?.is_some() {
            return Err(ValidationError::DuplicateRoleId(param.role_id).into());
        }

        let role = repo.create(param).await?;

        AuditService::new(self.db)
            .record(
                format!(
                    "{} created privileged role '{}' ({} slots)",
                    actor_name, role.role_name, role.whitelist_slots
                ),
                "role",
            )
            .await?;

        Ok(role)
    }

    /// Updates an existing privileged role.
    ///
    /// # Returns
    /// - `Ok(PrivilegedRole)` - The updated role
    /// - `Err(AppError::NotFound)` - No role with that Discord role ID
    pub async fn update(
        &self,
        role_id: &str,
        param: UpsertPrivilegedRoleParam,
        actor_name: &str,
    ) -> Result<PrivilegedRole, AppError> {
        let repo = PrivilegedRoleRepository::new(self.db);

        if param.role_id != role_id && repo.find_by_role_id(&param.role_id).await?.is_some() {
            return Err(ValidationError::DuplicateRoleId(param.role_id).into());
        }

        let Some(role) = repo.update(role_id, param).await? else {
            return Err(AppError::NotFound(format!(
                "Privileged role '{}' not found",
                role_id
            )));
        };

        AuditService::new(self.db)
            .record(
                format!("{} updated privileged role '{}'", actor_name, role.role_name),
                "role",
            )
            .await?;

        Ok(role)
    }

    /// Deletes a privileged role mapping.
    ///
    /// The underlying Discord role and the guild role record are untouched;
    /// only the slot/permission mapping goes away.
    pub async fn delete(&self, role_id: &str, actor_name: &str) -> Result<(), AppError> {
        let deleted = PrivilegedRoleRepository::new(self.db).delete(role_id).await?;

        if !deleted {
            return Err(AppError::NotFound(format!(
                "Privileged role '{}' not found",
                role_id
            )));
        }

        AuditService::new(self.db)
            .record(
                format!("{} deleted privileged role '{}'", actor_name, role_id),
                "role",
            )
            .await?;

        Ok(())
    }
}
