//! List endpoint management and plaintext rendering.
//!
//! The public list endpoints serve the game server's remote admin list
//! format: a `Group=<name>:<perm,...>` line per group followed by
//! `Admin=<steam64>:<group> // <label>` lines for each member.

use sea_orm::DatabaseConnection;

use crate::{
    model::permission::Permission,
    server::{
        data::{
            api_key::ApiKeyRepository, discord_user::DiscordUserRepository,
            list_endpoint::ListEndpointRepository, privileged_role::PrivilegedRoleRepository,
        },
        error::{auth::AuthError, validation::ValidationError, AppError},
        model::{
            access::ResolvedAccess,
            admin_group::AdminGroup,
            list::{ListEndpoint, UpsertListEndpointParam},
            user::DiscordUser,
        },
        service::{audit::AuditService, authorization},
    },
};

/// Group name used when a whitelist-mode list has no whitelist group snapshot
/// configured.
const FALLBACK_WHITELIST_GROUP: &str = "Whitelist";

fn group_line(name: &str, permissions: &[Permission]) -> String {
    let perms = permissions
        .iter()
        .map(Permission::as_str)
        .collect::<Vec<_>>()
        .join(",");
    format!("Group={}:{}", name, perms)
}

fn admin_line(steam_id: &str, group_name: &str, label: &str) -> String {
    format!("Admin={}:{} // {}", steam_id, group_name, label)
}

/// Renders a list endpoint against the resolved user population.
///
/// Users arrive in insertion order and that order is preserved in the
/// output. Callers filter out disabled users beforehand.
pub fn render_list(list: &ListEndpoint, users: &[(DiscordUser, ResolvedAccess)]) -> String {
    let mut lines: Vec<String> = Vec::new();

    if list.use_whitelist_group {
        render_whitelist_mode(list, users, &mut lines);
    } else {
        render_admin_mode(list, users, &mut lines);
    }

    let mut output = lines.join("\n");
    output.push('\n');
    output
}

/// Whitelist mode: one group line for the distinguished whitelist group,
/// then every whitelist entry of every user holding that group.
fn render_whitelist_mode(
    list: &ListEndpoint,
    users: &[(DiscordUser, ResolvedAccess)],
    lines: &mut Vec<String>,
) {
    let configured = list
        .admin_groups
        .iter()
        .find(|group| group.enabled && group.is_whitelist_group);

    let (group_name, permissions) = match configured {
        Some(group) => (group.group_name.as_str(), group.permissions.as_slice()),
        None => (FALLBACK_WHITELIST_GROUP, &[Permission::Reserve][..]),
    };

    lines.push(group_line(group_name, permissions));

    let mut seen: Vec<&str> = Vec::new();
    for (user, access) in users {
        if !access.has_whitelist_group() {
            continue;
        }

        for entry in &user.whitelist_entries {
            if seen.contains(&entry.steam_id.as_str()) {
                continue;
            }
            seen.push(&entry.steam_id);

            let label = entry.name.as_deref().unwrap_or(&user.name);
            lines.push(admin_line(&entry.steam_id, group_name, label));
        }
    }
}

/// Admin mode: one section per configured enabled group. With
/// `all_roles_enabled`, a user belongs to every configured group they share
/// at least one permission with; otherwise only to groups they hold by exact
/// name.
fn render_admin_mode(
    list: &ListEndpoint,
    users: &[(DiscordUser, ResolvedAccess)],
    lines: &mut Vec<String>,
) {
    for group in list.admin_groups.iter().filter(|group| group.enabled) {
        lines.push(group_line(&group.group_name, &group.permissions));

        let mut seen: Vec<&str> = Vec::new();
        for (user, access) in users {
            let qualifies = if list.all_roles_enabled {
                group
                    .permissions
                    .iter()
                    .any(|permission| access.permissions.contains(permission))
            } else {
                access.has_group_named(&group.group_name)
            };

            if !qualifies {
                continue;
            }

            let Some(steam_id) = user.admin_steam_id.as_deref() else {
                continue;
            };
            if seen.contains(&steam_id) {
                continue;
            }
            seen.push(steam_id);

            lines.push(admin_line(steam_id, &group.group_name, &user.name));
        }
    }
}

pub struct ListService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> ListService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn get_all(&self) -> Result<Vec<ListEndpoint>, AppError> {
        ListEndpointRepository::new(self.db).get_all().await
    }

    /// Serves a public list endpoint as plaintext.
    ///
    /// # Returns
    /// - `Ok(String)` - The rendered list
    /// - `Err(AppError::AuthErr(InvalidApiKey))` - Missing or unknown key
    /// - `Err(AppError::NotFound)` - Unknown or disabled list; the two cases
    ///   are indistinguishable to the caller
    pub async fn render(&self, list_name: &str, api_key: Option<&str>) -> Result<String, AppError> {
        let Some(api_key) = api_key else {
            return Err(AuthError::InvalidApiKey.into());
        };
        if !ApiKeyRepository::new(self.db).exists(api_key).await? {
            return Err(AuthError::InvalidApiKey.into());
        }

        let list = ListEndpointRepository::new(self.db)
            .find_by_name(list_name)
            .await?
            .filter(|list| list.enabled)
            .ok_or_else(|| AppError::NotFound(format!("List '{}' not found", list_name)))?;

        let privileged_roles = PrivilegedRoleRepository::new(self.db).get_all().await?;

        let users = DiscordUserRepository::new(self.db)
            .get_all()
            .await?
            .into_iter()
            .filter(|user| user.enabled)
            .map(|user| {
                let access = authorization::resolve(&user.roles, privileged_roles.clone());
                (user, access)
            })
            .collect::<Vec<_>>();

        Ok(render_list(&list, &users))
    }

    /// Creates a new list endpoint.
    pub async fn create(
        &self,
        param: UpsertListEndpointParam,
        actor_name: &str,
    ) -> Result<ListEndpoint, AppError> {
        let repo = ListEndpointRepository::new(self.db);

        if repo.find_by_name(&param.list_name).await?.is_some() {
            return Err(ValidationError::DuplicateListName(param.list_name).into());
        }

        let list = repo.create(param).await?;

        AuditService::new(self.db)
            .record(
                format!("{} created list '{}'", actor_name, list.list_name),
                "list",
            )
            .await?;

        Ok(list)
    }

    /// Updates an existing list endpoint.
    pub async fn update(
        &self,
        list_name: &str,
        param: UpsertListEndpointParam,
        actor_name: &str,
    ) -> Result<ListEndpoint, AppError> {
        let repo = ListEndpointRepository::new(self.db);

        if param.list_name != list_name && repo.find_by_name(&param.list_name).await?.is_some() {
            return Err(ValidationError::DuplicateListName(param.list_name).into());
        }

        let Some(list) = repo.update(list_name, param).await? else {
            return Err(AppError::NotFound(format!(
                "List '{}' not found",
                list_name
            )));
        };

        AuditService::new(self.db)
            .record(
                format!("{} updated list '{}'", actor_name, list.list_name),
                "list",
            )
            .await?;

        Ok(list)
    }

    /// Deletes a list endpoint.
    pub async fn delete(&self, list_name: &str, actor_name: &str) -> Result<(), AppError> {
        let deleted = ListEndpointRepository::new(self.db).delete(list_name).await?;

        if !deleted {
            return Err(AppError::NotFound(format!(
                "List '{}' not found",
                list_name
            )));
        }

        AuditService::new(self.db)
            .record(
                format!("{} deleted list '{}'", actor_name, list_name),
                "list",
            )
            .await?;

        Ok(())
    }
}
