#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, Response, StatusCode};
use axum::Router;
use disciplineos_ai::{AiError, FeedbackService, GoalFeedback, GoalPlan, JournalFeedback};
use disciplineos_api::app::build_app;
use disciplineos_api::auth::jwt::JwtConfig;
use disciplineos_api::config::ServerConfig;
use disciplineos_api::state::AppState;
use disciplineos_core::analytics::CoachInputRow;
use disciplineos_core::goals::GoalPlanInput;
use http_body_util::BodyExt;
use serde_json::Value;
use sqlx::PgPool;
use tower::ServiceExt;

// ---------------------------------------------------------------------------
// Stub AI coach
// ---------------------------------------------------------------------------

/// Canned AI answers. Counts calls; `failing()` makes every call error.
#[derive(Default)]
pub struct StubFeedback {
    pub calls: AtomicUsize,
    pub fail: bool,
    /// Last goal-plan payload received.
    pub last_plan_input: std::sync::Mutex<Option<GoalPlanInput>>,
}

impl StubFeedback {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    pub fn call_count(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    fn record(&self) -> Result<(), AiError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            Err(AiError::HttpStatus {
                status: 503,
                body: "model overloaded".into(),
            })
        } else {
            Ok(())
        }
    }
}

#[async_trait]
impl FeedbackService for StubFeedback {
    async fn journal_feedback(&self, entry: &str) -> Result<JournalFeedback, AiError> {
        self.record()?;
        Ok(JournalFeedback {
            mood: "Positive".into(),
            experience: format!("Wrote {} characters.", entry.len()),
            insights: "Keep going.".into(),
        })
    }

    async fn goal_feedback(&self, rows: &[CoachInputRow]) -> Result<GoalFeedback, AiError> {
        self.record()?;
        Ok(GoalFeedback {
            observation: format!("{} categories tracked.", rows.len()),
            suggestion: "Split big goals.".into(),
        })
    }

    async fn goal_plan(&self, goal: &GoalPlanInput) -> Result<GoalPlan, AiError> {
        self.record()?;
        *self.last_plan_input.lock().unwrap() = Some(goal.clone());
        Ok(GoalPlan {
            suggested_steps: vec!["Step one".into(), "Step two".into(), "Step three".into()],
        })
    }
}

// ---------------------------------------------------------------------------
// App construction
// ---------------------------------------------------------------------------

pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        cors_origins: vec!["http://localhost:3000".to_string()],
        request_timeout_secs: 30,
        jwt: JwtConfig {
            secret: "test-secret-that-is-long-enough-for-hmac".to_string(),
            access_token_expiry_mins: 60,
        },
    }
}

/// Full router with the production middleware stack and a stub AI coach.
pub fn build_test_app(pool: PgPool) -> Router {
    build_test_app_with(pool, Arc::new(StubFeedback::default()))
}

pub fn build_test_app_with(pool: PgPool, feedback: Arc<StubFeedback>) -> Router {
    build_app(AppState {
        pool,
        config: Arc::new(test_config()),
        feedback,
    })
}

// ---------------------------------------------------------------------------
// Request helpers
// ---------------------------------------------------------------------------

pub async fn send(
    app: Router,
    method: &str,
    uri: &str,
    token: Option<&str>,
    body: Option<Value>,
) -> Response<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    if let Some(token) = token {
        builder = builder.header("authorization", format!("Bearer {token}"));
    }
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, "GET", uri, None, None).await
}

pub async fn get_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, "GET", uri, Some(token), None).await
}

pub async fn post_json(app: Router, uri: &str, body: Value) -> Response<Body> {
    send(app, "POST", uri, None, Some(body)).await
}

pub async fn post_json_auth(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, "POST", uri, Some(token), Some(body)).await
}

pub async fn put_json_auth(app: Router, uri: &str, token: &str, body: Value) -> Response<Body> {
    send(app, "PUT", uri, Some(token), Some(body)).await
}

pub async fn delete_auth(app: Router, uri: &str, token: &str) -> Response<Body> {
    send(app, "DELETE", uri, Some(token), None).await
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sign up through the API; returns `(access_token, user_id)`.
pub async fn signup(app: Router, email: &str) -> (String, i64) {
    let response = post_json(
        app,
        "/api/v1/auth/signup",
        serde_json::json!({ "email": email, "password": "password123" }),
    )
    .await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let json = body_json(response).await;
    (
        json["access_token"].as_str().unwrap().to_string(),
        json["user"]["id"].as_i64().unwrap(),
    )
}
