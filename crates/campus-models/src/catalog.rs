//! Catalog entities: uniquely named rows that students reference.
//!
//! Programs and subjects share one contract. Each implements [`Catalog`],
//! which names its table, the `alumno` column pointing at it, and the
//! messages clients see.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use sqlx::postgres::PgRow;
use utoipa::ToSchema;
use validator::Validate;

use campus_core::{Payload, contains_letter};

/// Client-facing messages for one catalog entity.
#[derive(Debug, Clone, Copy)]
pub struct CatalogMessages {
    /// List found no rows.
    pub empty: &'static str,
    /// Get found no row.
    pub not_found: &'static str,
    /// Update target does not exist.
    pub update_missing: &'static str,
    /// Delete target does not exist.
    pub delete_missing: &'static str,
    /// Another row already has the normalized name.
    pub duplicate: &'static str,
    /// Students still reference the row.
    pub has_students: &'static str,
    pub deleted: &'static str,
}

pub trait Catalog:
    for<'r> FromRow<'r, PgRow> + Serialize + Send + Unpin + std::fmt::Debug + 'static
{
    const TABLE: &'static str;
    /// Column of `alumno` that references this table.
    const STUDENT_COLUMN: &'static str;
    const MESSAGES: CatalogMessages;
}

/// Body of a program or subject create/update.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct CatalogPayload {
    #[serde(default)]
    #[validate(custom(function = "contains_letter"))]
    pub nombre: String,
}

impl Payload for CatalogPayload {
    const REJECTION: &'static str = "Faltan datos.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_payload_validation() {
        let missing: CatalogPayload = serde_json::from_str("{}").unwrap();
        assert!(missing.validate().is_err());

        let digits: CatalogPayload = serde_json::from_str(r#"{"nombre":"2024"}"#).unwrap();
        assert!(digits.validate().is_err());

        let ok: CatalogPayload = serde_json::from_str(r#"{"nombre":"ingenieria"}"#).unwrap();
        assert!(ok.validate().is_ok());
    }
}
