use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::{Modify, OpenApi};

use campus_models::accounts::{LoginRequest, RegisterRequest};
use campus_models::programs::Program;
use campus_models::students::{Student, StudentPayload};
use campus_models::subjects::Subject;
use campus_models::{
    CatalogPayload, CreatedResponse, DeletedResponse, ErrorResponse, MessageResponse,
    MutationResult, TokenResponse,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::modules::auth::controller::register_user,
        crate::modules::auth::controller::login_user,
        crate::modules::programs::controller::get_programs,
        crate::modules::programs::controller::get_program,
        crate::modules::programs::controller::create_program,
        crate::modules::programs::controller::update_program,
        crate::modules::programs::controller::delete_program,
        crate::modules::subjects::controller::get_subjects,
        crate::modules::subjects::controller::get_subject,
        crate::modules::subjects::controller::create_subject,
        crate::modules::subjects::controller::update_subject,
        crate::modules::subjects::controller::delete_subject,
        crate::modules::students::controller::get_students,
        crate::modules::students::controller::get_student,
        crate::modules::students::controller::create_student,
        crate::modules::students::controller::update_student,
        crate::modules::students::controller::delete_student,
    ),
    components(
        schemas(
            RegisterRequest,
            LoginRequest,
            MessageResponse,
            TokenResponse,
            ErrorResponse,
            Program,
            Subject,
            CatalogPayload,
            Student,
            StudentPayload,
            MutationResult,
            CreatedResponse,
            DeletedResponse,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Authentication", description = "Account registration and login"),
        (name = "Programs", description = "Degree programs (carrera)"),
        (name = "Subjects", description = "Subjects (materia)"),
        (name = "Students", description = "Students (alumno)")
    ),
    info(
        title = "Campus API",
        version = "0.1.0",
        description = "Academic records for a university: programs, subjects and students behind token authentication.",
        license(
            name = "MIT"
        )
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .build(),
                ),
            )
        }
    }
}
