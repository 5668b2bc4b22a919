//! Payload validation helpers shared by the request DTOs.

use std::borrow::Cow;

use validator::ValidationError;

/// Request bodies that are rejected with a single, payload-specific message.
///
/// Any malformed body (bad JSON, wrong field type, missing field, or a
/// failed field rule) is answered with `REJECTION` as a validation error.
pub trait Payload {
    const REJECTION: &'static str;
}

/// Accepts text containing at least one ASCII letter.
pub fn contains_letter(value: &str) -> Result<(), ValidationError> {
    if value.chars().any(|c| c.is_ascii_alphabetic()) {
        return Ok(());
    }

    let mut error = ValidationError::new("contains_letter");
    error.message = Some(Cow::Borrowed("must contain at least one letter"));
    Err(error)
}
