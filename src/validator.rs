//! Request extraction with payload validation.

use std::convert::Infallible;

use axum::{
    Json,
    extract::{FromRequest, FromRequestParts, Path, Request},
    http::request::Parts,
};
use serde::de::DeserializeOwned;
use validator::Validate;

use campus_core::{AppError, Payload};

/// Runs the field rules of a payload, answering any failure with its rejection message.
pub fn validate_payload<T>(value: &T) -> Result<(), AppError>
where
    T: Validate + Payload,
{
    value.validate().map_err(|errors| {
        tracing::debug!(errors = %errors, "Payload failed validation");
        AppError::validation(T::REJECTION)
    })
}

/// JSON body that has been deserialized and validated.
///
/// Malformed JSON, a missing `Content-Type`, wrong field types and failed
/// field rules are all the same validation error for the client.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Payload,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(|rejection| {
                tracing::debug!(rejection = %rejection.body_text(), "Rejected request body");
                AppError::validation(T::REJECTION)
            })?;

        validate_payload(&value)?;

        Ok(ValidatedJson(value))
    }
}

/// Numeric id from the `{id}` path segment.
///
/// Anything that is not a positive integer cannot name a stored row, so it is
/// passed on as `None` and the handler answers with its own "not found".
/// That includes segments axum cannot decode, such as invalid UTF-8.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordId(pub Option<i32>);

impl<S> FromRequestParts<S> for RecordId
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        match Path::<String>::from_request_parts(parts, state).await {
            Ok(Path(raw)) => Ok(RecordId(parse_record_id(&raw))),
            Err(rejection) => {
                tracing::debug!(rejection = %rejection.body_text(), "Unreadable record id");
                Ok(RecordId(None))
            }
        }
    }
}

fn parse_record_id(raw: &str) -> Option<i32> {
    raw.parse::<i32>().ok().filter(|id| *id > 0)
}
