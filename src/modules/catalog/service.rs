use std::marker::PhantomData;

use sqlx::PgPool;
use tracing::instrument;

use campus_core::AppError;
use campus_models::{Catalog, CatalogPayload, MutationResult, normalize_name};

/// CRUD for one catalog table.
///
/// Table and column names come from the [`Catalog`] constants, never from
/// input. Every validate-then-write flow runs in one transaction, with the
/// target row locked before the checks.
pub struct CatalogService<C>(PhantomData<C>);

impl<C: Catalog> CatalogService<C> {
    #[instrument(skip(db), fields(table = C::TABLE))]
    pub async fn list(db: &PgPool) -> Result<Vec<C>, AppError> {
        let sql = format!("SELECT id, nombre FROM {} ORDER BY id", C::TABLE);

        let rows = sqlx::query_as::<_, C>(&sql).fetch_all(db).await?;

        Ok(rows)
    }

    #[instrument(skip(db), fields(table = C::TABLE))]
    pub async fn get(db: &PgPool, id: Option<i32>) -> Result<C, AppError> {
        let not_found = || AppError::not_found(C::MESSAGES.not_found);
        let id = id.ok_or_else(not_found)?;

        let sql = format!("SELECT id, nombre FROM {} WHERE id = $1", C::TABLE);

        sqlx::query_as::<_, C>(&sql)
            .bind(id)
            .fetch_optional(db)
            .await?
            .ok_or_else(not_found)
    }

    #[instrument(skip(db), fields(table = C::TABLE))]
    pub async fn create(db: &PgPool, dto: CatalogPayload) -> Result<MutationResult, AppError> {
        let nombre = normalize_name(&dto.nombre);

        let mut tx = db.begin().await?;

        let lookup = format!("SELECT id FROM {} WHERE nombre = $1", C::TABLE);
        let existing = sqlx::query_scalar::<_, i32>(&lookup)
            .bind(&nombre)
            .fetch_optional(&mut *tx)
            .await?;

        if existing.is_some() {
            return Err(AppError::duplicate_name(C::MESSAGES.duplicate));
        }

        let insert = format!("INSERT INTO {} (nombre) VALUES ($1) RETURNING id", C::TABLE);
        let id = sqlx::query_scalar::<_, i32>(&insert)
            .bind(&nombre)
            .fetch_one(&mut *tx)
            .await
            .map_err(duplicate_name::<C>)?;

        tx.commit().await?;

        Ok(MutationResult::inserted(id))
    }

    #[instrument(skip(db), fields(table = C::TABLE))]
    pub async fn update(
        db: &PgPool,
        id: Option<i32>,
        dto: CatalogPayload,
    ) -> Result<MutationResult, AppError> {
        let missing = || AppError::not_found(C::MESSAGES.update_missing);
        let id = id.ok_or_else(missing)?;
        let nombre = normalize_name(&dto.nombre);

        let mut tx = db.begin().await?;

        lock_row(&mut tx, C::TABLE, id).await?.ok_or_else(missing)?;

        let update = format!("UPDATE {} SET nombre = $1 WHERE id = $2", C::TABLE);
        let result = sqlx::query(&update)
            .bind(&nombre)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(duplicate_name::<C>)?;

        tx.commit().await?;

        Ok(MutationResult::updated(result.rows_affected()))
    }

    /// Deletes a row that no student references and returns the confirmation message.
    #[instrument(skip(db), fields(table = C::TABLE))]
    pub async fn delete(db: &PgPool, id: Option<i32>) -> Result<&'static str, AppError> {
        let missing = || AppError::not_found(C::MESSAGES.delete_missing);
        let id = id.ok_or_else(missing)?;

        let mut tx = db.begin().await?;

        let target = lock_row(&mut tx, C::TABLE, id).await?;

        let children = format!(
            "SELECT EXISTS(SELECT 1 FROM alumno WHERE {} = $1)",
            C::STUDENT_COLUMN
        );
        let has_students = sqlx::query_scalar::<_, bool>(&children)
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        if has_students {
            return Err(AppError::conflict_has_children(C::MESSAGES.has_students));
        }

        target.ok_or_else(missing)?;

        let delete = format!("DELETE FROM {} WHERE id = $1", C::TABLE);
        sqlx::query(&delete)
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(|e| {
                if let sqlx::Error::Database(db_err) = &e
                    && db_err.is_foreign_key_violation()
                {
                    return AppError::conflict_has_children(C::MESSAGES.has_students);
                }
                AppError::from(e)
            })?;

        tx.commit().await?;

        Ok(C::MESSAGES.deleted)
    }
}

/// Locks a row for the rest of the transaction, returning its id if it exists.
pub(crate) async fn lock_row(
    tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
    table: &str,
    id: i32,
) -> Result<Option<i32>, AppError> {
    let sql = format!("SELECT id FROM {} WHERE id = $1 FOR UPDATE", table);

    let row = sqlx::query_scalar::<_, i32>(&sql)
        .bind(id)
        .fetch_optional(&mut **tx)
        .await?;

    Ok(row)
}

fn duplicate_name<C: Catalog>(e: sqlx::Error) -> AppError {
    if let sqlx::Error::Database(db_err) = &e
        && db_err.is_unique_violation()
    {
        return AppError::duplicate_name(C::MESSAGES.duplicate);
    }
    AppError::from(e)
}
