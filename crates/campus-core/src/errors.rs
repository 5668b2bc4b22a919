//! Application error taxonomy.
//!
//! Every failure a handler can produce is an [`AppError`]: a tagged
//! [`ErrorKind`] plus the underlying [`anyhow::Error`]. Business-rule failures
//! carry the message shown to the client; anything else is
//! [`ErrorKind::Unexpected`] and is reported with a generic message while the
//! real cause is logged.
//!
//! The HTTP status of a kind depends on the active [`StatusPolicy`]. The
//! response produced by [`IntoResponse`] uses [`StatusPolicy::Legacy`] and
//! records the kind in the response extensions so a later layer can remap it.

use std::fmt;
use std::str::FromStr;

use anyhow::Error;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Body message for every [`ErrorKind::Unexpected`] response.
pub const UNEXPECTED_MESSAGE: &str = "Error inesperado.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// Missing field, wrong type, or a text field without any letter.
    Validation,
    /// A program or subject with the same normalized name exists.
    DuplicateName,
    /// The username is already registered.
    DuplicateUsername,
    /// A student references a program or subject that does not exist.
    ForeignKeyNotFound,
    NotFound,
    /// Login with an unknown username.
    UserNotFound,
    /// A program or subject still has students referencing it.
    ConflictHasChildren,
    MissingToken,
    InvalidToken,
    BadPassword,
    Unexpected,
}

/// Which status code convention error responses follow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusPolicy {
    /// Status codes exactly as existing clients observe them.
    #[default]
    Legacy,
    /// Conflicts as 409 and authentication failures as 401.
    Semantic,
}

impl FromStr for StatusPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "legacy" => Ok(Self::Legacy),
            "semantic" => Ok(Self::Semantic),
            other => Err(format!("unknown status policy: {other}")),
        }
    }
}

impl ErrorKind {
    pub fn status(self, policy: StatusPolicy) -> StatusCode {
        match (self, policy) {
            (Self::Validation, _) => StatusCode::BAD_REQUEST,
            (Self::NotFound | Self::ForeignKeyNotFound, _) => StatusCode::NOT_FOUND,
            (Self::Unexpected, _) => StatusCode::INTERNAL_SERVER_ERROR,

            (Self::DuplicateName | Self::UserNotFound | Self::BadPassword, StatusPolicy::Legacy) => {
                StatusCode::NOT_FOUND
            }
            (
                Self::DuplicateUsername
                | Self::ConflictHasChildren
                | Self::MissingToken
                | Self::InvalidToken,
                StatusPolicy::Legacy,
            ) => StatusCode::BAD_REQUEST,

            (
                Self::DuplicateName | Self::DuplicateUsername | Self::ConflictHasChildren,
                StatusPolicy::Semantic,
            ) => StatusCode::CONFLICT,
            (
                Self::UserNotFound | Self::BadPassword | Self::MissingToken | Self::InvalidToken,
                StatusPolicy::Semantic,
            ) => StatusCode::UNAUTHORIZED,
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self, f)
    }
}

#[derive(Debug)]
pub struct AppError {
    pub kind: ErrorKind,
    pub error: Error,
}

impl AppError {
    pub fn new<E>(kind: ErrorKind, err: E) -> Self
    where
        E: Into<Error>,
    {
        Self {
            kind,
            error: err.into(),
        }
    }

    fn message(kind: ErrorKind, message: impl Into<String>) -> Self {
        Self::new(kind, Error::msg(message.into()))
    }

    pub fn internal<E>(err: E) -> Self
    where
        E: Into<Error>,
    {
        Self::new(ErrorKind::Unexpected, err)
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::Validation, message)
    }

    pub fn duplicate_name(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::DuplicateName, message)
    }

    pub fn duplicate_username(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::DuplicateUsername, message)
    }

    pub fn foreign_key_not_found(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::ForeignKeyNotFound, message)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::NotFound, message)
    }

    pub fn user_not_found(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::UserNotFound, message)
    }

    pub fn conflict_has_children(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::ConflictHasChildren, message)
    }

    pub fn missing_token(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::MissingToken, message)
    }

    pub fn invalid_token(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::InvalidToken, message)
    }

    pub fn bad_password(message: impl Into<String>) -> Self {
        Self::message(ErrorKind::BadPassword, message)
    }

    /// The message sent to the client for this error.
    pub fn client_message(&self) -> String {
        match self.kind {
            ErrorKind::Unexpected => UNEXPECTED_MESSAGE.to_string(),
            _ => self.error.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self.kind {
            ErrorKind::Unexpected => tracing::error!(error = ?self.error, "Unexpected error"),
            kind => tracing::debug!(kind = %kind, error = %self.error, "Request rejected"),
        }

        let body = Json(json!({
            "Error": self.client_message()
        }));

        let mut response = (self.kind.status(StatusPolicy::Legacy), body).into_response();
        response.extensions_mut().insert(self.kind);
        response
    }
}

impl<E> From<E> for AppError
where
    E: Into<Error>,
{
    fn from(err: E) -> Self {
        AppError::internal(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_legacy_statuses_match_existing_clients() {
        let policy = StatusPolicy::Legacy;
        assert_eq!(ErrorKind::Validation.status(policy), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::DuplicateName.status(policy), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::DuplicateUsername.status(policy), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::ForeignKeyNotFound.status(policy), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::ConflictHasChildren.status(policy), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::MissingToken.status(policy), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::InvalidToken.status(policy), StatusCode::BAD_REQUEST);
        assert_eq!(ErrorKind::BadPassword.status(policy), StatusCode::NOT_FOUND);
        assert_eq!(ErrorKind::UserNotFound.status(policy), StatusCode::NOT_FOUND);
        assert_eq!(
            ErrorKind::Unexpected.status(policy),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_semantic_statuses() {
        let policy = StatusPolicy::Semantic;
        assert_eq!(ErrorKind::DuplicateName.status(policy), StatusCode::CONFLICT);
        assert_eq!(ErrorKind::DuplicateUsername.status(policy), StatusCode::CONFLICT);
        assert_eq!(ErrorKind::ConflictHasChildren.status(policy), StatusCode::CONFLICT);
        assert_eq!(ErrorKind::BadPassword.status(policy), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::MissingToken.status(policy), StatusCode::UNAUTHORIZED);
        assert_eq!(ErrorKind::NotFound.status(policy), StatusCode::NOT_FOUND);
    }

    #[test]
    fn test_status_policy_from_str() {
        assert_eq!("legacy".parse::<StatusPolicy>(), Ok(StatusPolicy::Legacy));
        assert_eq!(" Semantic ".parse::<StatusPolicy>(), Ok(StatusPolicy::Semantic));
        assert!("strict".parse::<StatusPolicy>().is_err());
    }

    #[test]
    fn test_foreign_errors_become_unexpected() {
        let err: AppError = std::io::Error::other("connection reset").into();
        assert_eq!(err.kind, ErrorKind::Unexpected);
        assert_eq!(err.client_message(), UNEXPECTED_MESSAGE);
    }

    #[test]
    fn test_business_errors_keep_their_message() {
        let err = AppError::not_found("La carrera no existe.");
        assert_eq!(err.kind, ErrorKind::NotFound);
        assert_eq!(err.client_message(), "La carrera no existe.");
    }

    #[test]
    fn test_into_response_records_kind() {
        let response = AppError::conflict_has_children("tiene alumnos").into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.extensions().get::<ErrorKind>(),
            Some(&ErrorKind::ConflictHasChildren)
        );
    }
}
