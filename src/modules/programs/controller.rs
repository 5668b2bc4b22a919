use axum::{Json, extract::State};
use tracing::instrument;

use campus_core::AppError;

use super::model::{
    Catalog, CatalogPayload, CreatedResponse, DeletedResponse, ErrorResponse, MutationResult,
    Program,
};
use crate::audit_event;
use crate::middleware::auth::AuthUser;
use crate::modules::catalog::CatalogService;
use crate::state::AppState;
use crate::utils::listing::non_empty;
use crate::validator::{RecordId, ValidatedJson};

type Programs = CatalogService<Program>;

#[utoipa::path(
    get,
    path = "/api/carrera",
    responses(
        (status = 200, description = "Every program", body = Vec<Program>),
        (status = 400, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No programs stored", body = ErrorResponse)
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_programs(State(state): State<AppState>) -> Result<Json<Vec<Program>>, AppError> {
    let programs = Programs::list(&state.db).await?;

    Ok(Json(non_empty(
        programs,
        &state.compat,
        Program::MESSAGES.empty,
    )?))
}

#[utoipa::path(
    get,
    path = "/api/carrera/{id}",
    params(
        ("id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "The program, as a one-element list", body = Vec<Program>),
        (status = 400, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_program(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Vec<Program>>, AppError> {
    let program = Programs::get(&state.db, id).await?;

    Ok(Json(vec![program]))
}

#[utoipa::path(
    post,
    path = "/api/carrera",
    request_body = CatalogPayload,
    responses(
        (status = 200, description = "Program created", body = CreatedResponse),
        (status = 400, description = "Missing data or invalid token", body = ErrorResponse),
        (status = 404, description = "A program with that name exists", body = ErrorResponse)
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_program(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<CatalogPayload>,
) -> Result<Json<CreatedResponse>, AppError> {
    let result = Programs::create(&state.db, dto).await?;

    audit_event!("create", "carrera", id = ?result.insert_id, actor = %auth_user.username());

    Ok(Json(CreatedResponse { respuesta: result }))
}

#[utoipa::path(
    put,
    path = "/api/carrera/{id}",
    params(
        ("id" = i32, Path, description = "Program ID")
    ),
    request_body = CatalogPayload,
    responses(
        (status = 200, description = "Program updated", body = MutationResult),
        (status = 400, description = "Missing data or invalid token", body = ErrorResponse),
        (status = 404, description = "Program not found or name taken", body = ErrorResponse)
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_program(
    State(state): State<AppState>,
    auth_user: AuthUser,
    RecordId(id): RecordId,
    ValidatedJson(dto): ValidatedJson<CatalogPayload>,
) -> Result<Json<MutationResult>, AppError> {
    let result = Programs::update(&state.db, id, dto).await?;

    audit_event!("update", "carrera", id = ?id, actor = %auth_user.username());

    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/carrera/{id}",
    params(
        ("id" = i32, Path, description = "Program ID")
    ),
    responses(
        (status = 200, description = "Program deleted", body = DeletedResponse),
        (status = 400, description = "Students reference the program, or invalid token", body = ErrorResponse),
        (status = 404, description = "Program not found", body = ErrorResponse)
    ),
    tag = "Programs",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_program(
    State(state): State<AppState>,
    auth_user: AuthUser,
    RecordId(id): RecordId,
) -> Result<Json<DeletedResponse>, AppError> {
    let message = Programs::delete(&state.db, id).await?;

    audit_event!("delete", "carrera", id = ?id, actor = %auth_user.username());

    Ok(Json(DeletedResponse {
        respuesta: message.to_string(),
    }))
}
