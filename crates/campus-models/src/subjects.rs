//! Subjects (`materia`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::catalog::{Catalog, CatalogMessages};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Subject {
    pub id: i32,
    pub nombre: String,
}

impl Catalog for Subject {
    const TABLE: &'static str = "materia";
    const STUDENT_COLUMN: &'static str = "materia_id";
    const MESSAGES: CatalogMessages = CatalogMessages {
        empty: "No hay ninguna materia para mostrar.",
        not_found: "La materia no existe.",
        update_missing: "No se encuentra esa materia.",
        delete_missing: "No existe la materia indicada.",
        duplicate: "Ese nombre de materia ya existe.",
        has_students: "La materia tiene alumnos asociados. NO se puede ELIMINAR.",
        deleted: "La materia se eliminó correctamente",
    };
}
