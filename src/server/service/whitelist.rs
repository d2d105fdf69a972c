//! Whitelist submission validation and storage.

use sea_orm::DatabaseConnection;

use crate::server::{
    data::discord_user::DiscordUserRepository,
    error::{validation::ValidationError, AppError},
    model::{access::ResolvedAccess, user::DiscordUser, user::WhitelistEntry},
    service::audit::AuditService,
    util::steam::is_valid_steam64_id,
};

/// Validates submitted whitelist rows against the user's slot allowance.
///
/// Rows with an empty Steam ID are dropped silently (blank form rows). Any
/// remaining row failing the Steam64 format check, or a row count above the
/// slot allowance, rejects the whole submission; nothing is partially
/// applied.
pub fn validate_rows(
    rows: Vec<WhitelistEntry>,
    allowed_slots: u32,
) -> Result<Vec<WhitelistEntry>, ValidationError> {
    let rows: Vec<WhitelistEntry> = rows
        .into_iter()
        .filter(|row| !row.steam_id.trim().is_empty())
        .collect();

    for row in &rows {
        if !is_valid_steam64_id(&row.steam_id) {
            return Err(ValidationError::InvalidSteamId {
                steam_id: row.steam_id.clone(),
            });
        }
    }

    if rows.len() > allowed_slots as usize {
        return Err(ValidationError::SlotLimitExceeded {
            submitted: rows.len(),
            allowed: allowed_slots,
        });
    }

    Ok(rows)
}

pub struct WhitelistService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WhitelistService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Validates and stores a user's whitelist submission.
    ///
    /// On success the rows replace the user's stored entries wholesale.
    ///
    /// # Returns
    /// - `Ok(Vec<WhitelistEntry>)` - The stored rows after filtering
    /// - `Err(AppError::ValidationErr(_))` - Malformed Steam ID or slot
    ///   overrun; the stored entries are unchanged
    pub async fn submit(
        &self,
        user: &DiscordUser,
        access: &ResolvedAccess,
        rows: Vec<WhitelistEntry>,
    ) -> Result<Vec<WhitelistEntry>, AppError> {
        let rows = validate_rows(rows, access.whitelist_slots)?;

        DiscordUserRepository::new(self.db)
            .update_whitelist_entries(&user.discord_id, &rows)
            .await?;

        AuditService::new(self.db)
            .record(
                format!(
                    "{} updated their whitelist entries ({} of {} slots used)",
                    user.name,
                    rows.len(),
                    access.whitelist_slots
                ),
                "whitelist",
            )
            .await?;

        Ok(rows)
    }
}
