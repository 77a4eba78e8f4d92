//! `AppError` to HTTP response mapping, without a server.

use axum::http::StatusCode;
use axum::response::IntoResponse;
use disciplineos_ai::AiError;
use disciplineos_api::error::AppError;
use disciplineos_core::error::CoreError;
use disciplineos_core::timer::TimerError;
use http_body_util::BodyExt;

async fn error_to_response(err: AppError) -> (StatusCode, serde_json::Value) {
    let response = err.into_response();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    (status, serde_json::from_slice(&bytes).unwrap())
}

#[tokio::test]
async fn not_found_returns_404() {
    let (status, json) = error_to_response(AppError::Core(CoreError::NotFound {
        entity: "Habit",
        id: 42,
    }))
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(json["code"], "NOT_FOUND");
    assert_eq!(json["error"], "Habit with id 42 not found");
}

#[tokio::test]
async fn validation_returns_400() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Validation("Habit name cannot be empty".into())))
            .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["code"], "VALIDATION_ERROR");
    assert_eq!(json["error"], "Habit name cannot be empty");
}

#[tokio::test]
async fn conflict_returns_409() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Conflict("already stopped".into()))).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(json["code"], "CONFLICT");
}

#[tokio::test]
async fn unauthorized_returns_401() {
    let (status, json) =
        error_to_response(AppError::Core(CoreError::Unauthorized("no token".into()))).await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(json["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn auth_internal_errors_are_sanitized() {
    let (status, json) =
        error_to_response(AppError::InternalError("secret stack trace".into())).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "INTERNAL_ERROR");
    assert_eq!(json["error"], "An internal error occurred");
}

#[tokio::test]
async fn database_errors_keep_their_message() {
    let (status, json) = error_to_response(AppError::Database(sqlx::Error::PoolTimedOut)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "DATABASE_ERROR");
    let message = json["error"].as_str().unwrap();
    assert!(message.starts_with("Database error: "), "got {message}");
    assert!(message.contains("pool timed out"), "got {message}");

    let (status, json) = error_to_response(AppError::Core(CoreError::Internal(
        "Database error: connection reset".into(),
    )))
    .await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["error"], "Database error: connection reset");
}

#[tokio::test]
async fn row_not_found_returns_404() {
    let (status, _) = error_to_response(AppError::Database(sqlx::Error::RowNotFound)).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn ai_errors_keep_their_message() {
    let (status, json) = error_to_response(AppError::Ai(AiError::NotConfigured)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(json["code"], "AI_ERROR");
    assert_eq!(json["error"], "AI service is not configured.");

    let (_, json) = error_to_response(AppError::Ai(AiError::HttpStatus {
        status: 429,
        body: "quota".into(),
    }))
    .await;
    assert_eq!(json["error"], "Gemini API request failed: 429 - quota");
}

#[tokio::test]
async fn timer_errors_map_to_http() {
    let (status, json) = error_to_response(TimerError::NoCategorySelected.into()).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(json["error"], "Please select a category first.");

    let (status, _) = error_to_response(TimerError::AlreadyRunning { session_id: 3 }.into()).await;
    assert_eq!(status, StatusCode::CONFLICT);

    let (status, _) = error_to_response(
        TimerError::Gateway(CoreError::NotFound {
            entity: "TimeSession",
            id: 9,
        })
        .into(),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}
