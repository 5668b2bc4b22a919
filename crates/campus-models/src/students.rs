//! Students (`alumno`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;
use validator::Validate;

use campus_core::{Payload, contains_letter, deserialize_lenient_i32};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Student {
    pub id: i32,
    pub nombre: String,
    pub apellido: String,
    pub materia_id: i32,
    pub carrera_id: i32,
}

/// Body of a student create/update. Both references are required and may be
/// sent as numbers or numeric strings.
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct StudentPayload {
    #[serde(default)]
    #[validate(custom(function = "contains_letter"))]
    pub nombre: String,
    #[serde(default)]
    #[validate(custom(function = "contains_letter"))]
    pub apellido: String,
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[validate(range(min = 1))]
    pub materia_id: i32,
    #[serde(default, deserialize_with = "deserialize_lenient_i32")]
    #[validate(range(min = 1))]
    pub carrera_id: i32,
}

impl Payload for StudentPayload {
    const REJECTION: &'static str = "Faltan datos.";
}

pub mod messages {
    pub const EMPTY: &str = "No hay ningún alumno para mostrar.";
    pub const NOT_FOUND: &str = "El alumno no existe.";
    pub const UPDATE_MISSING: &str = "No se encuentra ese alumno.";
    pub const DELETE_MISSING: &str = "No existe el alumno indicado.";
    pub const SUBJECT_MISSING: &str = "Esa materia no existe";
    pub const PROGRAM_MISSING: &str = "Esa carrera no existe";
    pub const REFERENCE_MISSING: &str = "Esa carrera o materia no existe";
    pub const DELETED: &str = "El alumno se eliminó correctamente";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_student_payload_requires_references() {
        let dto: StudentPayload =
            serde_json::from_str(r#"{"nombre":"ana","apellido":"perez","materia_id":1}"#).unwrap();
        assert!(dto.validate().is_err());

        let dto: StudentPayload = serde_json::from_str(
            r#"{"nombre":"ana","apellido":"perez","materia_id":1,"carrera_id":2}"#,
        )
        .unwrap();
        assert!(dto.validate().is_ok());
    }

    #[test]
    fn test_student_payload_accepts_numeric_string_ids() {
        let dto: StudentPayload = serde_json::from_str(
            r#"{"nombre":"ana","apellido":"perez","materia_id":"1","carrera_id":"2"}"#,
        )
        .unwrap();
        assert_eq!(dto.materia_id, 1);
        assert_eq!(dto.carrera_id, 2);
        assert!(dto.validate().is_ok());

        let bad = serde_json::from_str::<StudentPayload>(
            r#"{"nombre":"ana","apellido":"perez","materia_id":"uno","carrera_id":2}"#,
        );
        assert!(bad.is_err());
    }

    #[test]
    fn test_student_payload_rejects_letterless_names() {
        let dto: StudentPayload = serde_json::from_str(
            r#"{"nombre":"123","apellido":"perez","materia_id":1,"carrera_id":2}"#,
        )
        .unwrap();
        assert!(dto.validate().is_err());
    }
}
