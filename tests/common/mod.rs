#![allow(dead_code)]

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use serde_json::{Value, json};
use sqlx::PgPool;
use tower::ServiceExt;

use campus::router::init_router;
use campus::state::AppState;
use campus_config::jwt::DEFAULT_TOKEN_EXPIRY;
use campus_config::{CompatConfig, CorsConfig, JwtConfig};

pub const TEST_SECRET: &str = "campus-test-secret";

pub fn test_jwt_config() -> JwtConfig {
    JwtConfig {
        secret: TEST_SECRET.to_string(),
        token_expiry: DEFAULT_TOKEN_EXPIRY,
    }
}

pub fn test_state(pool: PgPool, compat: CompatConfig) -> AppState {
    AppState {
        db: pool,
        jwt_config: test_jwt_config(),
        cors_config: CorsConfig {
            allowed_origins: vec!["*".to_string()],
        },
        compat,
    }
}

pub fn setup_test_app(pool: PgPool) -> Router {
    init_router(test_state(pool, CompatConfig::default()))
}

pub fn setup_test_app_with(pool: PgPool, compat: CompatConfig) -> Router {
    init_router(test_state(pool, compat))
}

/// Sends one request and returns the status with the decoded JSON body.
pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);

    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {}", token));
    }

    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(serde_json::to_string(&body).unwrap()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };

    (status, body)
}

pub async fn register(app: Router, usuario: &str, clave: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/registro",
        None,
        Some(json!({
            "usuario": usuario,
            "clave": clave,
            "email": format!("{}@uni.edu", usuario)
        })),
    )
    .await
}

pub async fn login(app: Router, usuario: &str, clave: &str) -> (StatusCode, Value) {
    send(
        app,
        "POST",
        "/login",
        None,
        Some(json!({ "usuario": usuario, "clave": clave })),
    )
    .await
}

/// Registers a fresh account and returns a session token for it.
pub async fn get_auth_token(pool: &PgPool) -> String {
    let app = setup_test_app(pool.clone());
    let (status, _) = register(app.clone(), "ana1", "x9").await;
    assert_eq!(status, StatusCode::OK);

    let (status, body) = login(app, "ana1", "x9").await;
    assert_eq!(status, StatusCode::OK);
    body["token"].as_str().unwrap().to_string()
}

pub async fn create_program(app: Router, token: &str, nombre: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/carrera",
        Some(token),
        Some(json!({ "nombre": nombre })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["respuesta"]["insertId"].as_i64().unwrap()
}

pub async fn create_subject(app: Router, token: &str, nombre: &str) -> i64 {
    let (status, body) = send(
        app,
        "POST",
        "/api/materia",
        Some(token),
        Some(json!({ "nombre": nombre })),
    )
    .await;
    assert_eq!(status, StatusCode::OK, "{body}");
    body["respuesta"]["insertId"].as_i64().unwrap()
}
