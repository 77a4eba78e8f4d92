//! Signup, login, and the bearer-token extractor.

mod common;

use axum::http::StatusCode;
use common::{body_json, build_test_app, get, get_auth, post_json, signup};
use serde_json::json;
use sqlx::PgPool;

#[sqlx::test(migrations = "../../db/migrations")]
async fn signup_normalizes_email_and_seeds_categories(pool: PgPool) {
    let app = build_test_app(pool);
    let response = post_json(
        app.clone(),
        "/api/v1/auth/signup",
        json!({ "email": "  Alice@Example.COM ", "password": "password123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);

    let json = body_json(response).await;
    assert_eq!(json["user"]["email"], "alice@example.com");
    assert_eq!(json["expires_in"], 3600);
    let token = json["access_token"].as_str().unwrap();

    let categories = body_json(get_auth(app, "/api/v1/time/categories", token).await).await;
    let mut names: Vec<_> = categories["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["name"].as_str().unwrap().to_string())
        .collect();
    names.sort();
    assert_eq!(names, vec!["Exercise", "Study", "Work"]);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn duplicate_signup_conflicts(pool: PgPool) {
    let app = build_test_app(pool);
    signup(app.clone(), "bob@example.com").await;

    let response = post_json(
        app,
        "/api/v1/auth/signup",
        json!({ "email": "BOB@example.com", "password": "password123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CONFLICT);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn failed_signup_leaves_email_available(pool: PgPool) {
    let app = build_test_app(pool.clone());
    sqlx::query(
        "CREATE FUNCTION reject_exercise() RETURNS trigger LANGUAGE plpgsql AS $$ \
         BEGIN \
             IF NEW.name = 'Exercise' THEN RAISE EXCEPTION 'category insert rejected'; END IF; \
             RETURN NEW; \
         END $$",
    )
    .execute(&pool)
    .await
    .unwrap();
    sqlx::query(
        "CREATE TRIGGER trg_reject_exercise BEFORE INSERT ON time_categories \
         FOR EACH ROW EXECUTE FUNCTION reject_exercise()",
    )
    .execute(&pool)
    .await
    .unwrap();

    let body = json!({ "email": "frank@example.com", "password": "password123" });
    let response = post_json(app.clone(), "/api/v1/auth/signup", body.clone()).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    let json = body_json(response).await;
    assert_eq!(json["code"], "DATABASE_ERROR");
    assert!(json["error"].as_str().unwrap().contains("category insert rejected"));

    sqlx::query("DROP TRIGGER trg_reject_exercise ON time_categories")
        .execute(&pool)
        .await
        .unwrap();

    let response = post_json(app.clone(), "/api/v1/auth/signup", body).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let token = body_json(response).await["access_token"].as_str().unwrap().to_string();
    let categories = body_json(get_auth(app, "/api/v1/time/categories", &token).await).await;
    assert_eq!(categories["data"].as_array().unwrap().len(), 3);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn signup_rejects_weak_input(pool: PgPool) {
    let app = build_test_app(pool);

    let short = post_json(
        app.clone(),
        "/api/v1/auth/signup",
        json!({ "email": "c@example.com", "password": "short" }),
    )
    .await;
    assert_eq!(short.status(), StatusCode::BAD_REQUEST);

    let bad_email = post_json(
        app,
        "/api/v1/auth/signup",
        json!({ "email": "not-an-email", "password": "password123" }),
    )
    .await;
    assert_eq!(bad_email.status(), StatusCode::BAD_REQUEST);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn login_and_me(pool: PgPool) {
    let app = build_test_app(pool);
    let (_, user_id) = signup(app.clone(), "dana@example.com").await;

    let response = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "dana@example.com", "password": "password123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let token = body_json(response).await["access_token"].as_str().unwrap().to_string();

    let me = body_json(get_auth(app, "/api/v1/auth/me", &token).await).await;
    assert_eq!(me["id"], user_id);
    assert_eq!(me["email"], "dana@example.com");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn bad_credentials_are_401(pool: PgPool) {
    let app = build_test_app(pool);
    signup(app.clone(), "erin@example.com").await;

    let wrong_password = post_json(
        app.clone(),
        "/api/v1/auth/login",
        json!({ "email": "erin@example.com", "password": "wrong-password" }),
    )
    .await;
    assert_eq!(wrong_password.status(), StatusCode::UNAUTHORIZED);

    let unknown = post_json(
        app,
        "/api/v1/auth/login",
        json!({ "email": "nobody@example.com", "password": "password123" }),
    )
    .await;
    assert_eq!(unknown.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(unknown).await["error"], "Invalid email or password");
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn protected_routes_need_a_token(pool: PgPool) {
    let app = build_test_app(pool);

    let missing = get(app.clone(), "/api/v1/habits").await;
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);

    let garbage = get_auth(app, "/api/v1/habits", "not-a-jwt").await;
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(garbage).await["code"], "UNAUTHORIZED");
}
