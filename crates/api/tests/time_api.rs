//! Time categories and session start/stop over HTTP.

mod common;

use axum::http::StatusCode;
use chrono::{Duration, Utc};
use common::{
    body_json, build_test_app, delete_auth, get_auth, post_json_auth, put_json_auth, signup,
};
use disciplineos_db::repositories::TimeSessionRepo;
use serde_json::{json, Value};
use sqlx::PgPool;

async fn first_category(app: axum::Router, token: &str) -> i64 {
    let json = body_json(get_auth(app, "/api/v1/time/categories", token).await).await;
    json["data"][0]["id"].as_i64().unwrap()
}

async fn start(app: axum::Router, token: &str, body: Value) -> (StatusCode, Value) {
    let response = post_json_auth(app, "/api/v1/time/sessions", token, body).await;
    let status = response.status();
    (status, body_json(response).await)
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn start_without_category_is_rejected(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let (token, user) = signup(app.clone(), "u@example.com").await;

    let (status, json) = start(app, &token, json!({})).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Please select a category first.");

    let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM time_sessions WHERE user_id = $1")
        .bind(user)
        .fetch_one(&pool)
        .await
        .unwrap();
    assert_eq!(count, 0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn start_then_stop_records_duration(pool: PgPool) {
    let app = build_test_app(pool.clone());
    let (token, user) = signup(app.clone(), "u@example.com").await;
    let category = first_category(app.clone(), &token).await;

    let (status, json) = start(app.clone(), &token, json!({ "category_id": category })).await;
    assert_eq!(status, StatusCode::CREATED);
    let session_id = json["data"]["session_id"].as_i64().unwrap();
    assert!(json["data"]["start_time"].is_string());

    // Pretend the session started 90 minutes ago.
    sqlx::query("UPDATE time_sessions SET start_time = $2 WHERE id = $1")
        .bind(session_id)
        .bind(Utc::now() - Duration::minutes(90))
        .execute(&pool)
        .await
        .unwrap();

    let response = post_json_auth(
        app.clone(),
        &format!("/api/v1/time/sessions/{session_id}/stop"),
        &token,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::OK);
    let closed = body_json(response).await;
    let duration = closed["data"]["duration_seconds"].as_i64().unwrap();
    assert!((5400..=5401).contains(&duration), "got {duration}");

    let again = post_json_auth(
        app.clone(),
        &format!("/api/v1/time/sessions/{session_id}/stop"),
        &token,
        json!({}),
    )
    .await;
    assert_eq!(again.status(), StatusCode::CONFLICT);

    let history = body_json(get_auth(app, "/api/v1/time/sessions/history", &token).await).await;
    let item = &history["data"][0];
    assert_eq!(item["id"], session_id);
    assert!(item["duration_label"].as_str().unwrap().starts_with("1h 30m"));

    let stored = TimeSessionRepo::find_by_id(&pool, session_id, user).await.unwrap().unwrap();
    assert_eq!(stored.duration_seconds, Some(duration));
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn other_users_sessions_and_categories_are_hidden(pool: PgPool) {
    let app = build_test_app(pool);
    let (alice, _) = signup(app.clone(), "alice@example.com").await;
    let (bob, _) = signup(app.clone(), "bob@example.com").await;
    let alice_category = first_category(app.clone(), &alice).await;

    let (status, _) = start(app.clone(), &bob, json!({ "category_id": alice_category })).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (_, json) = start(app.clone(), &alice, json!({ "category_id": alice_category })).await;
    let session_id = json["data"]["session_id"].as_i64().unwrap();

    let response = post_json_auth(
        app,
        &format!("/api/v1/time/sessions/{session_id}/stop"),
        &bob,
        json!({}),
    )
    .await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn history_lists_completed_sessions_and_survives_category_delete(pool: PgPool) {
    let app = build_test_app(pool);
    let (token, _) = signup(app.clone(), "u@example.com").await;

    let created = body_json(
        post_json_auth(
            app.clone(),
            "/api/v1/time/categories",
            &token,
            json!({ "name": "Piano", "color": "#aa00ff" }),
        )
        .await,
    )
    .await;
    let piano = created["data"]["id"].as_i64().unwrap();

    let (_, started) = start(app.clone(), &token, json!({ "category_id": piano })).await;
    let session_id = started["data"]["session_id"].as_i64().unwrap();

    // Running sessions are not history yet.
    let history = body_json(get_auth(app.clone(), "/api/v1/time/sessions/history", &token).await).await;
    assert!(history["data"].as_array().unwrap().is_empty());

    post_json_auth(
        app.clone(),
        &format!("/api/v1/time/sessions/{session_id}/stop"),
        &token,
        json!({}),
    )
    .await;

    let history = body_json(get_auth(app.clone(), "/api/v1/time/sessions/history", &token).await).await;
    assert_eq!(history["data"][0]["category_name"], "Piano");
    assert_eq!(history["data"][0]["category_color"], "#aa00ff");

    let response = delete_auth(app.clone(), &format!("/api/v1/time/categories/{piano}"), &token).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let history = body_json(get_auth(app, "/api/v1/time/sessions/history", &token).await).await;
    assert_eq!(history["data"][0]["id"], session_id);
    assert_eq!(history["data"][0]["category_name"], "Uncategorized");
    assert_eq!(history["data"][0]["category_id"], Value::Null);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn category_validation(pool: PgPool) {
    let app = build_test_app(pool);
    let (token, _) = signup(app.clone(), "u@example.com").await;

    let blank = post_json_auth(
        app.clone(),
        "/api/v1/time/categories",
        &token,
        json!({ "name": "   " }),
    )
    .await;
    assert_eq!(blank.status(), StatusCode::BAD_REQUEST);

    let bad_color = post_json_auth(
        app.clone(),
        "/api/v1/time/categories",
        &token,
        json!({ "name": "Art", "color": "red" }),
    )
    .await;
    assert_eq!(bad_color.status(), StatusCode::BAD_REQUEST);

    let bad_parent = post_json_auth(
        app.clone(),
        "/api/v1/time/categories",
        &token,
        json!({ "name": "Art", "parent_category_id": 999_999 }),
    )
    .await;
    assert_eq!(bad_parent.status(), StatusCode::BAD_REQUEST);

    let parents = body_json(get_auth(app.clone(), "/api/v1/time/parent-categories", &token).await).await;
    let career = parents["data"]
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == "Career")
        .unwrap()["id"]
        .as_i64()
        .unwrap();

    let category = first_category(app.clone(), &token).await;
    let updated = put_json_auth(
        app,
        &format!("/api/v1/time/categories/{category}"),
        &token,
        json!({ "name": " Deep Work ", "color": "#112233", "parent_category_id": career }),
    )
    .await;
    assert_eq!(updated.status(), StatusCode::OK);
    let json = body_json(updated).await;
    assert_eq!(json["data"]["name"], "Deep Work");
    assert_eq!(json["data"]["parent_category_id"], career);
}
