use axum::{Json, extract::State};
use tracing::instrument;

use campus_core::AppError;

use super::model::{
    Catalog, CatalogPayload, CreatedResponse, DeletedResponse, ErrorResponse, MutationResult,
    Subject,
};
use crate::audit_event;
use crate::middleware::auth::AuthUser;
use crate::modules::catalog::CatalogService;
use crate::state::AppState;
use crate::utils::listing::non_empty;
use crate::validator::{RecordId, ValidatedJson};

type Subjects = CatalogService<Subject>;

#[utoipa::path(
    get,
    path = "/api/materia",
    responses(
        (status = 200, description = "Every subject", body = Vec<Subject>),
        (status = 400, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No subjects stored", body = ErrorResponse)
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_subjects(State(state): State<AppState>) -> Result<Json<Vec<Subject>>, AppError> {
    let subjects = Subjects::list(&state.db).await?;

    Ok(Json(non_empty(
        subjects,
        &state.compat,
        Subject::MESSAGES.empty,
    )?))
}

#[utoipa::path(
    get,
    path = "/api/materia/{id}",
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "The subject, as a one-element list", body = Vec<Subject>),
        (status = 400, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_subject(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Vec<Subject>>, AppError> {
    let subject = Subjects::get(&state.db, id).await?;

    Ok(Json(vec![subject]))
}

#[utoipa::path(
    post,
    path = "/api/materia",
    request_body = CatalogPayload,
    responses(
        (status = 200, description = "Subject created", body = CreatedResponse),
        (status = 400, description = "Missing data or invalid token", body = ErrorResponse),
        (status = 404, description = "A subject with that name exists", body = ErrorResponse)
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CatalogPayload>,
) -> Result<Json<CreatedResponse>, AppError> {
    let result = Subjects::create(&state.db, dto).await?;

    audit_event!("create", "materia", id = ?result.insert_id, actor = %auth_user.username());

    Ok(Json(CreatedResponse { respuesta: result }))
}

#[utoipa::path(
    put,
    path = "/api/materia/{id}",
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    request_body = CatalogPayload,
    responses(
        (status = 200, description = "Subject updated", body = MutationResult),
        (status = 400, description = "Missing data or invalid token", body = ErrorResponse),
        (status = 404, description = "Subject not found or name taken", body = ErrorResponse)
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    RecordId(id): RecordId,
    ValidatedJson(dto): ValidatedJson<CatalogPayload>,
) -> Result<Json<MutationResult>, AppError> {
    let result = Subjects::update(&state.db, id, dto).await?;

    audit_event!("update", "materia", id = ?id, actor = %auth_user.username());

    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/materia/{id}",
    params(
        ("id" = i32, Path, description = "Subject ID")
    ),
    responses(
        (status = 200, description = "Subject deleted", body = DeletedResponse),
        (status = 400, description = "Students reference the subject, or invalid token", body = ErrorResponse),
        (status = 404, description = "Subject not found", body = ErrorResponse)
    ),
    tag = "Subjects",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_subject(
    State(state): State<AppState>,
    auth_user: AuthUser,
    RecordId(id): RecordId,
) -> Result<Json<DeletedResponse>, AppError> {
    let message = Subjects::delete(&state.db, id).await?;

    audit_event!("delete", "materia", id = ?id, actor = %auth_user.username());

    Ok(Json(DeletedResponse {
        respuesta: message.to_string(),
    }))
}
