use sqlx::{PgPool, Postgres, Transaction};
use tracing::instrument;

use campus_core::AppError;
use campus_models::{MutationResult, normalize_name};

use super::model::{Student, StudentPayload, messages};
use crate::modules::catalog::service::lock_row;

pub struct StudentService;

impl StudentService {
    #[instrument(skip(db))]
    pub async fn list(db: &PgPool) -> Result<Vec<Student>, AppError> {
        let students = sqlx::query_as::<_, Student>(
            "SELECT id, nombre, apellido, materia_id, carrera_id FROM alumno ORDER BY id",
        )
        .fetch_all(db)
        .await?;

        Ok(students)
    }

    #[instrument(skip(db))]
    pub async fn get(db: &PgPool, id: Option<i32>) -> Result<Student, AppError> {
        let not_found = || AppError::not_found(messages::NOT_FOUND);
        let id = id.ok_or_else(not_found)?;

        sqlx::query_as::<_, Student>(
            "SELECT id, nombre, apellido, materia_id, carrera_id FROM alumno WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(db)
        .await?
        .ok_or_else(not_found)
    }

    /// Inserts a student once both referenced rows are confirmed, subject first.
    #[instrument(skip(db))]
    pub async fn create(db: &PgPool, dto: StudentPayload) -> Result<MutationResult, AppError> {
        let mut tx = db.begin().await?;

        if !share_row(&mut tx, "materia", dto.materia_id).await? {
            return Err(AppError::foreign_key_not_found(messages::SUBJECT_MISSING));
        }

        if !share_row(&mut tx, "carrera", dto.carrera_id).await? {
            return Err(AppError::foreign_key_not_found(messages::PROGRAM_MISSING));
        }

        let id = sqlx::query_scalar::<_, i32>(
            r#"
            INSERT INTO alumno (nombre, apellido, materia_id, carrera_id)
            VALUES ($1, $2, $3, $4)
            RETURNING id
            "#,
        )
        .bind(normalize_name(&dto.nombre))
        .bind(normalize_name(&dto.apellido))
        .bind(dto.materia_id)
        .bind(dto.carrera_id)
        .fetch_one(&mut *tx)
        .await
        .map_err(missing_reference)?;

        tx.commit().await?;

        Ok(MutationResult::inserted(id))
    }

    #[instrument(skip(db))]
    pub async fn update(
        db: &PgPool,
        id: Option<i32>,
        dto: StudentPayload,
    ) -> Result<MutationResult, AppError> {
        let missing = || AppError::not_found(messages::UPDATE_MISSING);
        let id = id.ok_or_else(missing)?;

        let mut tx = db.begin().await?;

        lock_row(&mut tx, "alumno", id).await?.ok_or_else(missing)?;

        let result = sqlx::query(
            r#"
            UPDATE alumno
            SET nombre = $1, apellido = $2, materia_id = $3, carrera_id = $4
            WHERE id = $5
            "#,
        )
        .bind(normalize_name(&dto.nombre))
        .bind(normalize_name(&dto.apellido))
        .bind(dto.materia_id)
        .bind(dto.carrera_id)
        .bind(id)
        .execute(&mut *tx)
        .await
        .map_err(missing_reference)?;

        tx.commit().await?;

        Ok(MutationResult::updated(result.rows_affected()))
    }

    #[instrument(skip(db))]
    pub async fn delete(db: &PgPool, id: Option<i32>) -> Result<&'static str, AppError> {
        let missing = || AppError::not_found(messages::DELETE_MISSING);
        let id = id.ok_or_else(missing)?;

        let mut tx = db.begin().await?;

        lock_row(&mut tx, "alumno", id).await?.ok_or_else(missing)?;

        sqlx::query("DELETE FROM alumno WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;

        Ok(messages::DELETED)
    }
}

/// Holds a shared lock on a referenced row so it cannot be deleted before commit.
async fn share_row(
    tx: &mut Transaction<'_, Postgres>,
    table: &str,
    id: i32,
) -> Result<bool, AppError> {
    let sql = format!("SELECT id FROM {} WHERE id = $1 FOR SHARE", table);

    let row = sqlx::query_scalar::<_, i32>(&sql)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

    Ok(row.is_some())
}

fn missing_reference(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_foreign_key_violation()
    {
        return AppError::foreign_key_not_found(messages::REFERENCE_MISSING);
    }
    AppError::from(e)
}
