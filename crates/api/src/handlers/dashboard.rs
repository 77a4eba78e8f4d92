//! Handlers for `/dashboard`: charts, heatmap, and the AI analysis.

use axum::extract::{Query, State};
use axum::response::IntoResponse;
use axum::Json;
use chrono::Duration;
use disciplineos_ai::GoalFeedback;
use disciplineos_core::analytics::{
    coach_input, goal_time_chart, time_chart, GoalTimeInput, TimeByCategoryInput,
    NO_DATA_OBSERVATION, NO_DATA_SUGGESTION,
};
use disciplineos_core::habits::{build_heatmap, today, CompletionRef, HabitRef, HEATMAP_DAYS};
use disciplineos_db::repositories::{AnalyticsRepo, HabitRepo};
use serde::Deserialize;

use crate::error::AppResult;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Default window for the time chart.
const DEFAULT_CHART_DAYS: i32 = 7;

/// Largest window the time chart accepts.
const MAX_CHART_DAYS: i32 = 365;

#[derive(Debug, Deserialize)]
pub struct TimeChartParams {
    pub days: Option<i32>,
}

/// GET /api/v1/dashboard/time-chart?days=7
pub async fn time_chart_data(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<TimeChartParams>,
) -> AppResult<impl IntoResponse> {
    let days = params.days.unwrap_or(DEFAULT_CHART_DAYS).clamp(1, MAX_CHART_DAYS);
    let rows: Vec<TimeByCategoryInput> = AnalyticsRepo::time_by_category(&state.pool, auth.user_id, days)
        .await?
        .into_iter()
        .map(Into::into)
        .collect();
    Ok(Json(DataResponse { data: time_chart(&rows, days) }))
}

/// GET /api/v1/dashboard/habit-heatmap
///
/// Last 30 UTC days, oldest first, one row per habit.
pub async fn habit_heatmap(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let end = today();
    let since = end - Duration::days(HEATMAP_DAYS as i64 - 1);

    let habits = HabitRepo::list_for_user(&state.pool, auth.user_id).await?;
    let completions = HabitRepo::completions_since(&state.pool, auth.user_id, since).await?;

    let habit_refs: Vec<HabitRef> = habits.iter().map(HabitRef::from).collect();
    let completion_refs: Vec<CompletionRef> = completions.iter().map(CompletionRef::from).collect();

    Ok(Json(DataResponse {
        data: build_heatmap(&habit_refs, &completion_refs, end, HEATMAP_DAYS),
    }))
}

async fn goal_time_rows(state: &AppState, user_id: i64) -> AppResult<Vec<GoalTimeInput>> {
    Ok(AnalyticsRepo::goal_time(&state.pool, user_id)
        .await?
        .into_iter()
        .map(Into::into)
        .collect())
}

/// GET /api/v1/dashboard/goal-time
pub async fn goal_time(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = goal_time_rows(&state, auth.user_id).await?;
    Ok(Json(DataResponse { data: goal_time_chart(&rows) }))
}

/// GET /api/v1/dashboard/analysis
///
/// Coach commentary on time versus goal progress. Without any data the
/// placeholder is returned and the AI is not called. Answers the bare
/// feedback object, without the `data` envelope.
pub async fn analysis(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let rows = goal_time_rows(&state, auth.user_id).await?;
    if rows.is_empty() {
        return Ok(Json(GoalFeedback {
            observation: NO_DATA_OBSERVATION.to_string(),
            suggestion: NO_DATA_SUGGESTION.to_string(),
        }));
    }

    let feedback = state.feedback.goal_feedback(&coach_input(&rows)).await?;

    tracing::info!(user_id = auth.user_id, categories = rows.len(), "Dashboard analysis generated");

    Ok(Json(feedback))
}
