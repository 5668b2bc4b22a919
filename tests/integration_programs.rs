mod common;

use axum::http::StatusCode;
use serde_json::json;
use sqlx::PgPool;

use campus_config::CompatConfig;
use common::{create_program, create_subject, get_auth_token, send, setup_test_app, setup_test_app_with};

#[sqlx::test(migrations = "./migrations")]
async fn test_list_programs_empty_is_not_found(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(app, "GET", "/api/carrera", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Error": "No hay ninguna carrera para mostrar." }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_list_programs_empty_allowed(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let compat = CompatConfig {
        empty_list_is_error: false,
        ..CompatConfig::default()
    };
    let app = setup_test_app_with(pool.clone(), compat);

    let (status, body) = send(app, "GET", "/api/carrera", Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_program_upper_cases_name(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app.clone(),
        "POST",
        "/api/carrera",
        Some(&token),
        Some(json!({ "nombre": "ingenieria" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["respuesta"]["affectedRows"], 1);
    let id = body["respuesta"]["insertId"].as_i64().unwrap();

    let (status, body) = send(app, "GET", &format!("/api/carrera/{}", id), Some(&token), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([{ "id": id, "nombre": "INGENIERIA" }]));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_program_duplicate_name(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());
    create_program(app.clone(), &token, "Ingenieria").await;

    let (status, body) = send(
        app,
        "POST",
        "/api/carrera",
        Some(&token),
        Some(json!({ "nombre": "INGENIERIA" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Error": "Ese nombre de carrera ya existe." }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_create_program_without_letters(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());

    for payload in [json!({ "nombre": "12345" }), json!({})] {
        let (status, body) =
            send(app.clone(), "POST", "/api/carrera", Some(&token), Some(payload)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, json!({ "Error": "Faltan datos." }));
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_get_program_not_found(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());

    for uri in ["/api/carrera/999", "/api/carrera/abc"] {
        let (status, body) = send(app.clone(), "GET", uri, Some(&token), None).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, json!({ "Error": "La carrera no existe." }));
    }
}

#[sqlx::test(migrations = "./migrations")]
async fn test_undecodable_program_id_is_not_found(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(app.clone(), "GET", "/api/carrera/%FF", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Error": "La carrera no existe." }));

    let (status, body) = send(app, "DELETE", "/api/carrera/%FF", Some(&token), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Error": "No existe la carrera indicada." }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_program(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());
    let id = create_program(app.clone(), &token, "Ingenieria").await;

    let (status, body) = send(
        app.clone(),
        "PUT",
        &format!("/api/carrera/{}", id),
        Some(&token),
        Some(json!({ "nombre": "medicina" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "affectedRows": 1 }));

    let (_, body) = send(app, "GET", &format!("/api/carrera/{}", id), Some(&token), None).await;
    assert_eq!(body[0]["nombre"], "MEDICINA");
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_program_missing(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());

    let (status, body) = send(
        app,
        "PUT",
        "/api/carrera/999",
        Some(&token),
        Some(json!({ "nombre": "medicina" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Error": "No se encuentra esa carrera." }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_update_program_to_taken_name(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());
    create_program(app.clone(), &token, "Ingenieria").await;
    let id = create_program(app.clone(), &token, "Medicina").await;

    let (status, body) = send(
        app,
        "PUT",
        &format!("/api/carrera/{}", id),
        Some(&token),
        Some(json!({ "nombre": "ingenieria" })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Error": "Ese nombre de carrera ya existe." }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_program(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());
    let id = create_program(app.clone(), &token, "Ingenieria").await;

    let (status, body) = send(
        app.clone(),
        "DELETE",
        &format!("/api/carrera/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "respuesta": "La carrera se eliminó correctamente" }));

    let (status, body) = send(
        app.clone(),
        "GET",
        &format!("/api/carrera/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Error": "La carrera no existe." }));

    let (status, body) = send(
        app,
        "DELETE",
        &format!("/api/carrera/{}", id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "Error": "No existe la carrera indicada." }));
}

#[sqlx::test(migrations = "./migrations")]
async fn test_delete_program_with_students(pool: PgPool) {
    let token = get_auth_token(&pool).await;
    let app = setup_test_app(pool.clone());
    let carrera_id = create_program(app.clone(), &token, "Ingenieria").await;
    let materia_id = create_subject(app.clone(), &token, "Algebra").await;

    let (status, _) = send(
        app.clone(),
        "POST",
        "/api/alumno",
        Some(&token),
        Some(json!({
            "nombre": "juan",
            "apellido": "perez",
            "materia_id": materia_id,
            "carrera_id": carrera_id
        })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = send(
        app,
        "DELETE",
        &format!("/api/carrera/{}", carrera_id),
        Some(&token),
        None,
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body,
        json!({ "Error": "La carrera tiene alumnos asociados. NO se puede ELIMINAR." })
    );

    let remaining: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM carrera")
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(remaining, 1);
}
