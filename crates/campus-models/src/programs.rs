//! Degree programs (`carrera`).

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

use crate::catalog::{Catalog, CatalogMessages};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Program {
    pub id: i32,
    pub nombre: String,
}

impl Catalog for Program {
    const TABLE: &'static str = "carrera";
    const STUDENT_COLUMN: &'static str = "carrera_id";
    const MESSAGES: CatalogMessages = CatalogMessages {
        empty: "No hay ninguna carrera para mostrar.",
        not_found: "La carrera no existe.",
        update_missing: "No se encuentra esa carrera.",
        delete_missing: "No existe la carrera indicada.",
        duplicate: "Ese nombre de carrera ya existe.",
        has_students: "La carrera tiene alumnos asociados. NO se puede ELIMINAR.",
        deleted: "La carrera se eliminó correctamente",
    };
}
