//! Success and error envelopes.
//!
//! The shapes follow what existing clients parse: inserts answer
//! `{"respuesta": {"insertId", "affectedRows"}}`, updates answer the bare
//! mutation result, deletes answer `{"respuesta": "<message>"}`, and errors
//! answer `{"Error": "<message>"}`.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Raw outcome of an insert or update.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MutationResult {
    /// Id generated by an insert
    #[serde(skip_serializing_if = "Option::is_none")]
    pub insert_id: Option<i32>,
    pub affected_rows: u64,
}

impl MutationResult {
    pub fn inserted(id: i32) -> Self {
        Self {
            insert_id: Some(id),
            affected_rows: 1,
        }
    }

    pub fn updated(affected_rows: u64) -> Self {
        Self {
            insert_id: None,
            affected_rows,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct CreatedResponse {
    pub respuesta: MutationResult,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct DeletedResponse {
    pub respuesta: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct MessageResponse {
    pub message: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct TokenResponse {
    pub token: String,
}

#[derive(Debug, Serialize, Deserialize, ToSchema)]
pub struct ErrorResponse {
    #[serde(rename = "Error")]
    pub error: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_created_response_shape() {
        let body = CreatedResponse {
            respuesta: MutationResult::inserted(5),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"respuesta": {"insertId": 5, "affectedRows": 1}})
        );
    }

    #[test]
    fn test_update_result_omits_insert_id() {
        assert_eq!(
            serde_json::to_value(MutationResult::updated(1)).unwrap(),
            json!({"affectedRows": 1})
        );
    }

    #[test]
    fn test_error_response_uses_capitalized_key() {
        let body = ErrorResponse {
            error: "Faltan datos.".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"Error": "Faltan datos."})
        );
    }
}
