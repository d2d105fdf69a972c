use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::model::api::ErrorDto;

#[derive(Error, Debug)]
pub enum AuthError {
    /// No user ID stored in the session; the caller is not logged in.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("No authenticated user in session")]
    UserNotInSession,

    /// The session references a Discord ID with no matching user record.
    ///
    /// Can happen if the user was deleted while their session was still
    /// live. Results in a 404 Not Found response.
    #[error("User {0} in session but not in database")]
    UserNotInDatabase(String),

    /// The user exists but lacks the permission the endpoint requires.
    ///
    /// Results in a 403 Forbidden response.
    #[error("Access denied for user {0}: {1}")]
    AccessDenied(String, String),

    /// The user's account has been disabled by an administrator.
    ///
    /// Results in a 403 Forbidden response.
    #[error("User {0} is disabled")]
    UserDisabled(String),

    /// CSRF state validation failed during OAuth callback.
    ///
    /// The CSRF token in the callback URL does not match the token stored in
    /// the session, indicating a potential CSRF attack or a stale callback.
    /// Results in a 400 Bad Request response.
    #[error("Failed to login user due to CSRF state mismatch")]
    CsrfValidationFailed,

    /// Exchanging the OAuth authorization code for a token failed.
    ///
    /// Results in a 502 Bad Gateway response; the caller may retry.
    #[error("Failed to exchange OAuth authorization code: {0}")]
    TokenExchangeFailed(String),

    /// The API key supplied for a list endpoint is missing or unknown.
    ///
    /// Results in a 401 Unauthorized response.
    #[error("Invalid or missing API key")]
    InvalidApiKey,
}

/// Converts authentication errors into HTTP responses.
///
/// Client-facing messages stay generic; the full error is logged at debug
/// level for diagnostics.
impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        tracing::debug!("Auth error: {}", self);

        let (status, message) = match &self {
            Self::UserNotInSession => (StatusCode::UNAUTHORIZED, "Not logged in"),
            Self::UserNotInDatabase(_) => (StatusCode::NOT_FOUND, "User not found"),
            Self::AccessDenied(_, _) => (StatusCode::FORBIDDEN, "Access denied"),
            Self::UserDisabled(_) => (StatusCode::FORBIDDEN, "Account disabled"),
            Self::CsrfValidationFailed => (
                StatusCode::BAD_REQUEST,
                "There was an issue logging you in, please try again.",
            ),
            Self::TokenExchangeFailed(_) => (
                StatusCode::BAD_GATEWAY,
                "There was an issue logging you in, please try again.",
            ),
            Self::InvalidApiKey => (StatusCode::UNAUTHORIZED, "Invalid or missing API key"),
        };

        (
            status,
            Json(ErrorDto {
                error: message.to_string(),
            }),
        )
            .into_response()
    }
}
