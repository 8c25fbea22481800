//! Shared helpers for the HTTP integration tests.

#![allow(dead_code)]

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use mim_api::app::build_router;
use mim_api::auth::jwt::{generate_access_token, JwtConfig};
use mim_api::auth::password::hash_password;
use mim_api::config::ServerConfig;
use mim_api::state::AppState;
use mim_core::custom_field::{KIND_DATE, KIND_NUMBER, KIND_TEXT};
use mim_core::types::DbId;
use mim_db::models::custom_field::{CreateCustomField, CreateFieldOption};
use mim_db::models::equipment_type::{CreateEquipmentType, EquipmentType};
use mim_db::models::user::{CreateUser, User};
use mim_db::repositories::{CustomFieldRepo, EquipmentTypeRepo, UserRepo};
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

pub const TEST_PASSWORD: &str = "motdepasse-2024";

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:5173".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "integration-test-secret".to_string(),
            expiry_mins: 60,
        },
    }
}

/// Build the full application router, middleware included, over `pool`.
pub fn build_test_app(pool: PgPool) -> Router {
    build_router(AppState {
        pool,
        config: Arc::new(test_config()),
    })
}

// ---------------------------------------------------------------------------
// Requests
// ---------------------------------------------------------------------------

pub async fn send(app: Router, request: Request<Body>) -> Response<Body> {
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(app, request).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    let request = Request::get(uri)
        .header("authorization", format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap();
    send(app, request).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn post_json_auth(app: Router, uri: &str, body: Value, token: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

/// POST a raw, possibly malformed, JSON body.
pub async fn post_raw_auth(app: Router, uri: &str, body: &str, token: &str) -> Response<Body> {
    let request = Request::post(uri)
        .header("content-type", "application/json")
        .header("authorization", format!("Bearer {token}"))
        .body(Body::from(body.to_string()))
        .unwrap();
    send(app, request).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

// ---------------------------------------------------------------------------
// Fixtures
// ---------------------------------------------------------------------------

/// Insert a user whose password is [`TEST_PASSWORD`].
pub async fn seed_user(pool: &PgPool, email: &str) -> User {
    UserRepo::create(
        pool,
        &CreateUser {
            email: email.to_string(),
            password_hash: hash_password(TEST_PASSWORD),
            last_name: "Durand".to_string(),
            first_name: "Claire".to_string(),
            role: "USER".to_string(),
        },
    )
    .await
    .unwrap()
}

/// Bearer token for a freshly seeded user.
pub async fn auth_token(pool: &PgPool) -> String {
    let user = seed_user(pool, "agent@mim.test").await;
    generate_access_token(user.id, &user.email, &user.role, &test_config().jwt).unwrap()
}

pub async fn seed_type(pool: &PgPool, family: &str, name: &str) -> EquipmentType {
    EquipmentTypeRepo::create(
        pool,
        &CreateEquipmentType {
            name: name.to_string(),
            family: family.to_string(),
        },
    )
    .await
    .unwrap()
}

pub async fn seed_field(
    pool: &PgPool,
    type_id: DbId,
    name: &str,
    data_kind: &str,
    alert_required: bool,
    uses_dropdown: bool,
) -> DbId {
    CustomFieldRepo::create(
        pool,
        &CreateCustomField {
            equipment_type_id: type_id,
            name: name.to_string(),
            data_kind: data_kind.to_string(),
            alert_required: Some(alert_required),
            visible_in_table: Some(true),
            uses_dropdown: Some(uses_dropdown),
        },
    )
    .await
    .unwrap()
    .id
}

pub async fn seed_option(pool: &PgPool, field_id: DbId, value: &str, sort_order: i32, active: bool) {
    CustomFieldRepo::add_option(
        pool,
        &CreateFieldOption {
            custom_field_id: field_id,
            value: value.to_string(),
            sort_order: Some(sort_order),
            is_active: Some(active),
        },
    )
    .await
    .unwrap();
}

/// Extinguisher type with an alert-required inspection date, a serial number
/// and a text note. Returns `(type, date_field, number_field, text_field)`.
pub async fn seed_extinguisher(pool: &PgPool) -> (EquipmentType, DbId, DbId, DbId) {
    let equipment_type = seed_type(pool, "Sécurité", "Extincteur").await;
    let date_field = seed_field(pool, equipment_type.id, "Date de contrôle", KIND_DATE, true, false).await;
    let number_field = seed_field(pool, equipment_type.id, "Numéro de série", KIND_NUMBER, false, false).await;
    let text_field = seed_field(pool, equipment_type.id, "Remarque", KIND_TEXT, false, false).await;
    (equipment_type, date_field, number_field, text_field)
}

pub async fn count_rows(pool: &PgPool, table: &str) -> i64 {
    let (count,): (i64,) = sqlx::query_as(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap();
    count
}
