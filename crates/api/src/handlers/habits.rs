//! Handlers for `/habits`.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use disciplineos_core::error::CoreError;
use disciplineos_core::habits::today;
use disciplineos_core::types::DbId;
use disciplineos_core::validation::require_name;
use disciplineos_db::models::habit::{CreateHabit, HabitToggleResult, UpdateHabit};
use disciplineos_db::repositories::HabitRepo;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: "Habit", id })
}

/// GET /api/v1/habits
///
/// Every habit with `completed_today` for the current UTC day.
pub async fn list_habits(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let habits = HabitRepo::list_with_status(&state.pool, auth.user_id, today()).await?;
    Ok(Json(DataResponse { data: habits }))
}

/// POST /api/v1/habits
pub async fn create_habit(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateHabit>,
) -> AppResult<impl IntoResponse> {
    let name = require_name("Habit name", &input.name)?;
    let habit = HabitRepo::create(&state.pool, auth.user_id, &name).await?;

    tracing::info!(habit_id = habit.id, user_id = auth.user_id, "Habit created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: habit })))
}

/// PUT /api/v1/habits/{id}
pub async fn update_habit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(habit_id): Path<DbId>,
    Json(input): Json<UpdateHabit>,
) -> AppResult<impl IntoResponse> {
    let name = require_name("Habit name", &input.name)?;
    let habit = HabitRepo::rename(&state.pool, habit_id, auth.user_id, &name)
        .await?
        .ok_or_else(|| not_found(habit_id))?;

    tracing::info!(habit_id, user_id = auth.user_id, "Habit renamed");

    Ok(Json(DataResponse { data: habit }))
}

/// DELETE /api/v1/habits/{id}
pub async fn delete_habit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(habit_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !HabitRepo::delete(&state.pool, habit_id, auth.user_id).await? {
        return Err(not_found(habit_id));
    }
    tracing::info!(habit_id, user_id = auth.user_id, "Habit deleted");
    Ok(StatusCode::NO_CONTENT)
}

/// POST /api/v1/habits/{id}/toggle
///
/// Mark today done, or undo it if already done.
pub async fn toggle_habit(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(habit_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    HabitRepo::find_by_id(&state.pool, habit_id, auth.user_id)
        .await?
        .ok_or_else(|| not_found(habit_id))?;

    let date = today();
    let completed = HabitRepo::toggle_completion(&state.pool, habit_id, auth.user_id, date).await?;

    tracing::info!(habit_id, user_id = auth.user_id, completed, "Habit toggled");

    Ok(Json(DataResponse {
        data: HabitToggleResult {
            habit_id,
            date,
            completed,
        },
    }))
}
