use axum::{Json, extract::State};
use tracing::instrument;

use campus_core::AppError;

use super::model::{
    CreatedResponse, DeletedResponse, ErrorResponse, MutationResult, Student, StudentPayload,
    messages,
};
use super::service::StudentService;
use crate::audit_event;
use crate::middleware::auth::AuthUser;
use crate::state::AppState;
use crate::utils::listing::non_empty;
use crate::validator::{RecordId, ValidatedJson};

#[utoipa::path(
    get,
    path = "/api/alumno",
    responses(
        (status = 200, description = "Every student", body = Vec<Student>),
        (status = 400, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "No students stored", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_students(State(state): State<AppState>) -> Result<Json<Vec<Student>>, AppError> {
    let students = StudentService::list(&state.db).await?;

    Ok(Json(non_empty(students, &state.compat, messages::EMPTY)?))
}

#[utoipa::path(
    get,
    path = "/api/alumno/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "The student, as a one-element list", body = Vec<Student>),
        (status = 400, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn get_student(
    State(state): State<AppState>,
    RecordId(id): RecordId,
) -> Result<Json<Vec<Student>>, AppError> {
    let student = StudentService::get(&state.db, id).await?;

    Ok(Json(vec![student]))
}

#[utoipa::path(
    post,
    path = "/api/alumno",
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student created", body = CreatedResponse),
        (status = 400, description = "Missing data or invalid token", body = ErrorResponse),
        (status = 404, description = "Referenced subject or program not found", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn create_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    ValidatedJson(dto): ValidatedJson<StudentPayload>,
) -> Result<Json<CreatedResponse>, AppError> {
    let result = StudentService::create(&state.db, dto).await?;

    audit_event!("create", "alumno", id = ?result.insert_id, actor = %auth_user.username());

    Ok(Json(CreatedResponse { respuesta: result }))
}

#[utoipa::path(
    put,
    path = "/api/alumno/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    request_body = StudentPayload,
    responses(
        (status = 200, description = "Student updated", body = MutationResult),
        (status = 400, description = "Missing data or invalid token", body = ErrorResponse),
        (status = 404, description = "Student or referenced row not found", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn update_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    RecordId(id): RecordId,
    ValidatedJson(dto): ValidatedJson<StudentPayload>,
) -> Result<Json<MutationResult>, AppError> {
    let result = StudentService::update(&state.db, id, dto).await?;

    audit_event!("update", "alumno", id = ?id, actor = %auth_user.username());

    Ok(Json(result))
}

#[utoipa::path(
    delete,
    path = "/api/alumno/{id}",
    params(
        ("id" = i32, Path, description = "Student ID")
    ),
    responses(
        (status = 200, description = "Student deleted", body = DeletedResponse),
        (status = 400, description = "Missing or invalid token", body = ErrorResponse),
        (status = 404, description = "Student not found", body = ErrorResponse)
    ),
    tag = "Students",
    security(("bearer_auth" = []))
)]
#[instrument(skip(state))]
pub async fn delete_student(
    State(state): State<AppState>,
    auth_user: AuthUser,
    RecordId(id): RecordId,
) -> Result<Json<DeletedResponse>, AppError> {
    let message = StudentService::delete(&state.db, id).await?;

    audit_event!("delete", "alumno", id = ?id, actor = %auth_user.username());

    Ok(Json(DeletedResponse {
        respuesta: message.to_string(),
    }))
}
