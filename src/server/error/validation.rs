use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

/// Rejected input at the schema or business-rule boundary.
///
/// A validation failure always rejects the whole operation; nothing is
/// partially applied. Unknown permission identifiers and out-of-range
/// weekdays are caught earlier, during serde deserialization of the request
/// body.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A submitted Steam ID does not match the 17-digit Steam64 format.
    #[error("'{steam_id}' is not a valid Steam64 ID")]
    InvalidSteamId { steam_id: String },

    /// More whitelist rows were submitted than the user has slots for.
    #[error("Submitted {submitted} whitelist rows but only {allowed} slots are available")]
    SlotLimitExceeded { submitted: usize, allowed: u32 },

    /// An admin group with this name already exists.
    #[error("An admin group named '{0}' already exists")]
    DuplicateGroupName(String),

    /// A privileged role with this Discord role ID already exists.
    #[error("A privileged role for role ID '{0}' already exists")]
    DuplicateRoleId(String),

    /// A list endpoint with this name already exists.
    #[error("A list named '{0}' already exists")]
    DuplicateListName(String),

    /// Another group already carries the whitelist-group flag.
    ///
    /// At most one admin group may be the distinguished whitelist group.
    #[error("Group '{0}' is already the whitelist group")]
    WhitelistGroupAlreadyExists(String),
}

/// Converts validation errors into HTTP responses.
///
/// Duplicate-key violations map to 409 Conflict; everything else is a
/// 400 Bad Request. The `Display` message is safe to surface to the caller
/// directly.
impl IntoResponse for ValidationError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::DuplicateGroupName(_)
            | Self::DuplicateRoleId(_)
            | Self::DuplicateListName(_)
            | Self::WhitelistGroupAlreadyExists(_) => StatusCode::CONFLICT,
            _ => StatusCode::BAD_REQUEST,
        };

        (
            status,
            Json(ErrorDto {
                error: self.to_string(),
            }),
        )
            .into_response()
    }
}
