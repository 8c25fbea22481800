//! HTTP-level integration tests for login, the current-user endpoint and
//! bearer token enforcement.

mod common;

use axum::http::StatusCode;
use common::{body_json, get, get_auth, post_json, seed_user, TEST_PASSWORD};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_returns_token_and_profile(pool: PgPool) {
    let user = seed_user(&pool, "claire@mim.test").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "claire@mim.test", "password": TEST_PASSWORD }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert!(json["data"]["token"].is_string());
    assert_eq!(json["data"]["user"]["id"], user.id);
    assert_eq!(json["data"]["user"]["email"], "claire@mim.test");
    assert_eq!(json["data"]["user"]["nom"], "Durand");
    assert_eq!(json["data"]["user"]["prenom"], "Claire");
    assert_eq!(json["data"]["user"]["role"], "USER");
    assert_eq!(json["data"]["user"]["estPremiereConnexion"], true);
    assert!(json["data"]["user"].get("password_hash").is_none());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_wrong_password_is_unauthorized(pool: PgPool) {
    seed_user(&pool, "claire@mim.test").await;
    let app = common::build_test_app(pool);

    let response = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "claire@mim.test", "password": "nope" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let json = body_json(response).await;
    assert_eq!(json["code"], "UNAUTHORIZED");
    assert_eq!(json["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_with_unknown_email_is_unauthorized(pool: PgPool) {
    let app = common::build_test_app(pool);

    for email in ["ghost@mim.test", "gh\0ost@mim.test"] {
        let response = post_json(
            app.clone(),
            "/api/v1/auth/login",
            json!({ "email": email, "password": TEST_PASSWORD }),
        )
        .await;
        assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(body_json(response).await["error"], "Invalid email or password");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_without_credentials_is_bad_request(pool: PgPool) {
    let app = common::build_test_app(pool);

    for body in [
        json!({ "email": "claire@mim.test" }),
        json!({ "email": 42, "password": TEST_PASSWORD }),
    ] {
        let response = post_json(app.clone(), "/api/v1/auth/login", body).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
        assert_eq!(body_json(response).await["code"], "BAD_REQUEST");
    }
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn token_from_login_opens_me(pool: PgPool) {
    seed_user(&pool, "claire@mim.test").await;
    let app = common::build_test_app(pool);

    let login = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "claire@mim.test", "password": TEST_PASSWORD }),
    )
    .await;
    let token = body_json(login).await["data"]["token"]
        .as_str()
        .unwrap()
        .to_string();

    let response = get_auth(app, "/api/v1/auth/me", &token).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["data"]["email"], "claire@mim.test");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn equipment_routes_require_a_bearer_token(pool: PgPool) {
    let app = common::build_test_app(pool);

    let response = get(app.clone(), "/api/v1/equipment/types").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");

    let response = get_auth(app, "/api/v1/equipment/types", "not-a-jwt").await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["error"], "Invalid or expired token");
}
