//! Handlers for goals, sub-tasks, and the AI goal plan.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use disciplineos_core::error::CoreError;
use disciplineos_core::goals::GoalPlanInput;
use disciplineos_core::types::DbId;
use disciplineos_core::validation::require_name;
use disciplineos_db::models::goal::{CreateGoal, CreateSubTask, UpdateGoal, UpdateSubTask};
use disciplineos_db::repositories::{GoalRepo, SubTaskRepo};
use serde::Deserialize;

use crate::error::{AppError, AppResult};
use crate::handlers::categories::check_parent;
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn goal_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Goal", id })
}

fn sub_task_not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "SubTask", id })
}

// ---------------------------------------------------------------------------
// Goals
// ---------------------------------------------------------------------------

/// GET /api/v1/goals
///
/// Goals with their sub-tasks and completion percentage.
pub async fn list_goals(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let goals = GoalRepo::list_with_sub_tasks(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: goals }))
}

/// POST /api/v1/goals
pub async fn create_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateGoal>,
) -> AppResult<impl IntoResponse> {
    let title = require_name("Goal title", &input.title)?;
    check_parent(&state.pool, input.parent_category_id).await?;

    let goal = GoalRepo::create(
        &state.pool,
        auth.user_id,
        &title,
        input.priority,
        input.parent_category_id,
    )
    .await?;

    tracing::info!(goal_id = goal.id, user_id = auth.user_id, "Goal created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: goal })))
}

/// PUT /api/v1/goals/{id}
pub async fn update_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<UpdateGoal>,
) -> AppResult<impl IntoResponse> {
    let title = require_name("Goal title", &input.title)?;
    check_parent(&state.pool, input.parent_category_id).await?;

    let goal = GoalRepo::update(
        &state.pool,
        goal_id,
        auth.user_id,
        &title,
        input.priority,
        input.parent_category_id,
    )
    .await?
    .ok_or_else(|| goal_not_found(goal_id))?;

    tracing::info!(goal_id, user_id = auth.user_id, "Goal updated");

    Ok(Json(DataResponse { data: goal }))
}

/// DELETE /api/v1/goals/{id}
pub async fn delete_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !GoalRepo::delete(&state.pool, goal_id, auth.user_id).await? {
        return Err(goal_not_found(goal_id));
    }
    tracing::info!(goal_id, user_id = auth.user_id, "Goal deleted");
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// Sub-tasks
// ---------------------------------------------------------------------------

/// POST /api/v1/goals/{id}/sub-tasks
pub async fn create_sub_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(goal_id): Path<DbId>,
    Json(input): Json<CreateSubTask>,
) -> AppResult<impl IntoResponse> {
    let title = require_name("Sub-task title", &input.title)?;
    GoalRepo::find_by_id(&state.pool, goal_id, auth.user_id)
        .await?
        .ok_or_else(|| goal_not_found(goal_id))?;

    let task = SubTaskRepo::create(&state.pool, goal_id, auth.user_id, &title).await?;

    tracing::info!(sub_task_id = task.id, goal_id, user_id = auth.user_id, "Sub-task created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: task })))
}

/// PUT /api/v1/sub-tasks/{id}
pub async fn update_sub_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(sub_task_id): Path<DbId>,
    Json(input): Json<UpdateSubTask>,
) -> AppResult<impl IntoResponse> {
    let title = require_name("Sub-task title", &input.title)?;
    let task = SubTaskRepo::rename(&state.pool, sub_task_id, auth.user_id, &title)
        .await?
        .ok_or_else(|| sub_task_not_found(sub_task_id))?;
    Ok(Json(DataResponse { data: task }))
}

/// POST /api/v1/sub-tasks/{id}/toggle
pub async fn toggle_sub_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(sub_task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    let task = SubTaskRepo::toggle(&state.pool, sub_task_id, auth.user_id)
        .await?
        .ok_or_else(|| sub_task_not_found(sub_task_id))?;

    tracing::info!(
        sub_task_id,
        user_id = auth.user_id,
        is_completed = task.is_completed,
        "Sub-task toggled"
    );

    Ok(Json(DataResponse { data: task }))
}

/// DELETE /api/v1/sub-tasks/{id}
pub async fn delete_sub_task(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(sub_task_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !SubTaskRepo::delete(&state.pool, sub_task_id, auth.user_id).await? {
        return Err(sub_task_not_found(sub_task_id));
    }
    Ok(StatusCode::NO_CONTENT)
}

// ---------------------------------------------------------------------------
// AI plan
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub struct GoalPlanRequest {
    #[serde(alias = "goalId")]
    pub goal_id: Option<DbId>,
}

/// POST /api/v1/goals/plan
///
/// Ask the coach for next steps given what is done and what is left.
/// Answers the bare plan object, without the `data` envelope.
pub async fn plan_goal(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<GoalPlanRequest>,
) -> AppResult<impl IntoResponse> {
    let goal_id = input
        .goal_id
        .ok_or_else(|| AppError::BadRequest("goal_id is required".into()))?;

    let goal = GoalRepo::find_by_id(&state.pool, goal_id, auth.user_id)
        .await?
        .ok_or_else(|| goal_not_found(goal_id))?;
    let tasks = SubTaskRepo::list_for_goal(&state.pool, goal_id, auth.user_id).await?;

    let plan_input = GoalPlanInput::new(
        &goal.title,
        tasks.iter().map(|t| (t.title.as_str(), t.is_completed)),
    );
    let plan = state.feedback.goal_plan(&plan_input).await?;

    tracing::info!(goal_id, user_id = auth.user_id, steps = plan.suggested_steps.len(), "Goal plan generated");

    Ok(Json(plan))
}
