//! Handlers for `/time/sessions`: start, stop, history.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use disciplineos_core::error::CoreError;
use disciplineos_core::time_tracking::format_compact;
use disciplineos_core::timer::{SessionGateway, SessionTimer};
use disciplineos_core::types::{DbId, Timestamp};
use disciplineos_db::gateway::PgSessionGateway;
use disciplineos_db::models::time_session::{HistoryParams, SessionHistoryRow, StartSession};
use disciplineos_db::repositories::TimeSessionRepo;
use serde::Serialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Label shown for sessions whose category was deleted.
const UNCATEGORIZED: &str = "Uncategorized";

#[derive(Debug, Serialize)]
pub struct StartedSession {
    pub session_id: DbId,
    pub start_time: Timestamp,
}

/// One history line, ready for display.
#[derive(Debug, Serialize)]
pub struct HistoryItem {
    pub id: DbId,
    pub category_id: Option<DbId>,
    pub category_name: String,
    pub category_color: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub duration_seconds: Option<i64>,
    /// `1h 2m 3s`, or `N/A` while running.
    pub duration_label: String,
}

impl From<SessionHistoryRow> for HistoryItem {
    fn from(r: SessionHistoryRow) -> Self {
        Self {
            id: r.id,
            category_id: r.category_id,
            category_name: r.category_name.unwrap_or_else(|| UNCATEGORIZED.to_string()),
            category_color: r.category_color,
            start_time: r.start_time,
            end_time: r.end_time,
            duration_label: format_compact(r.duration_seconds),
            duration_seconds: r.duration_seconds,
        }
    }
}

/// POST /api/v1/time/sessions
///
/// Open a session for `category_id`. The timer rejects a missing category
/// before anything is written.
pub async fn start_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<StartSession>,
) -> AppResult<impl IntoResponse> {
    let gateway = PgSessionGateway::new(state.pool.clone());
    let mut timer = SessionTimer::new(auth.user_id, gateway, input.category_id);
    let session_id = timer.start().await?;

    let session = TimeSessionRepo::find_by_id(&state.pool, session_id, auth.user_id)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "TimeSession",
            id: session_id,
        }))?;

    Ok((
        StatusCode::CREATED,
        Json(DataResponse {
            data: StartedSession {
                session_id,
                start_time: session.start_time,
            },
        }),
    ))
}

/// POST /api/v1/time/sessions/{id}/stop
///
/// Close the session; the duration is computed from the stored start time.
pub async fn stop_session(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(session_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let gateway = PgSessionGateway::new(state.pool.clone());
    let closed = gateway.close_session(session_id, auth.user_id).await?;
    Ok(Json(DataResponse { data: closed }))
}

/// GET /api/v1/time/sessions/history
pub async fn session_history(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<HistoryParams>,
) -> AppResult<impl IntoResponse> {
    let rows = TimeSessionRepo::history(&state.pool, auth.user_id, params.limit).await?;
    let items: Vec<HistoryItem> = rows.into_iter().map(HistoryItem::from).collect();
    Ok(Json(DataResponse { data: items }))
}
