//! Handlers for `/journals`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use disciplineos_core::error::CoreError;
use disciplineos_core::habits::today;
use disciplineos_core::types::DbId;
use disciplineos_core::validation::{require_text, MAX_JOURNAL_CONTENT_LENGTH};
use disciplineos_db::models::journal::UpsertJournalEntry;
use disciplineos_db::repositories::JournalRepo;
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "JournalEntry", id })
}

/// GET /api/v1/journals
///
/// `{ today, previous }`: today's entry if written, then older ones newest first.
pub async fn list_journals(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let overview = JournalRepo::overview(&state.pool, auth.user_id, today()).await?;
    Ok(Json(DataResponse { data: overview }))
}

/// PUT /api/v1/journals/today
///
/// Create or overwrite the entry for the current UTC day.
pub async fn upsert_today(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpsertJournalEntry>,
) -> AppResult<impl IntoResponse> {
    let content = require_text("Journal entry", &input.content, MAX_JOURNAL_CONTENT_LENGTH)?;
    let entry = JournalRepo::upsert(&state.pool, auth.user_id, today(), &content).await?;

    tracing::info!(entry_id = entry.id, user_id = auth.user_id, "Journal entry saved");

    Ok(Json(DataResponse { data: entry }))
}

/// DELETE /api/v1/journals/{id}
pub async fn delete_journal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(entry_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !JournalRepo::delete(&state.pool, entry_id, auth.user_id).await? {
        return Err(not_found(entry_id));
    }
    tracing::info!(entry_id, user_id = auth.user_id, "Journal entry deleted");
    Ok(StatusCode::NO_CONTENT)
}

#[derive(Debug, Deserialize)]
pub struct JournalAnalysisRequest {
    pub id: Option<DbId>,
}

/// POST /api/v1/journals/analysis
///
/// Mood, summary, and a short insight for one of the caller's entries.
/// Answers the bare feedback object, without the `data` envelope.
pub async fn analyze_journal(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<JournalAnalysisRequest>,
) -> AppResult<impl IntoResponse> {
    let entry_id = input
        .id
        .ok_or_else(|| AppError::BadRequest("Journal entry id is required".into()))?;

    let entry = JournalRepo::find_by_id(&state.pool, entry_id, auth.user_id)
        .await?
        .ok_or_else(|| not_found(entry_id))?;

    if entry.content.trim().is_empty() {
        return Err(AppError::BadRequest("Journal entry has no content".into()));
    }

    let feedback = state.feedback.journal_feedback(&entry.content).await?;

    tracing::info!(entry_id, user_id = auth.user_id, "Journal analysis generated");

    Ok(Json(feedback))
}
