//! Handlers for time categories and the shared parent categories.

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use disciplineos_core::error::CoreError;
use disciplineos_core::types::DbId;
use disciplineos_core::validation::{require_name, validate_color};
use disciplineos_db::models::category::{CreateTimeCategory, UpdateTimeCategory};
use disciplineos_db::repositories::{ParentCategoryRepo, TimeCategoryRepo};
use sqlx::PgPool;

use crate::error::{AppError, AppResult};
use crate::middleware::auth::AuthUser;
use crate::response::DataResponse;
use crate::state::AppState;

/// Reject a parent category id that does not exist.
pub(crate) async fn check_parent(pool: &PgPool, parent_category_id: Option<DbId>) -> AppResult<()> {
    if let Some(id) = parent_category_id {
        if !ParentCategoryRepo::exists(pool, id).await? {
            return Err(AppError::Core(CoreError::Validation(format!(
                "Unknown parent category {id}"
            ))));
        }
    }
    Ok(())
}

/// GET /api/v1/time/parent-categories
pub async fn list_parent_categories(
    _auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let parents = ParentCategoryRepo::list(&state.pool).await?;
    Ok(Json(DataResponse { data: parents }))
}

/// GET /api/v1/time/categories
pub async fn list_categories(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<impl IntoResponse> {
    let categories = TimeCategoryRepo::list_for_user(&state.pool, auth.user_id).await?;
    Ok(Json(DataResponse { data: categories }))
}

/// POST /api/v1/time/categories
pub async fn create_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<CreateTimeCategory>,
) -> AppResult<impl IntoResponse> {
    let name = require_name("Category name", &input.name)?;
    let color = validate_color(input.color.as_deref())?;
    check_parent(&state.pool, input.parent_category_id).await?;

    let category = TimeCategoryRepo::create(
        &state.pool,
        auth.user_id,
        &name,
        color.as_deref(),
        input.parent_category_id,
    )
    .await?;

    tracing::info!(category_id = category.id, user_id = auth.user_id, "Time category created");

    Ok((StatusCode::CREATED, Json(DataResponse { data: category })))
}

/// PUT /api/v1/time/categories/{id}
pub async fn update_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
    Json(input): Json<UpdateTimeCategory>,
) -> AppResult<impl IntoResponse> {
    let name = require_name("Category name", &input.name)?;
    let color = validate_color(input.color.as_deref())?;
    check_parent(&state.pool, input.parent_category_id).await?;

    let category = TimeCategoryRepo::update(
        &state.pool,
        category_id,
        auth.user_id,
        &name,
        color.as_deref(),
        input.parent_category_id,
    )
    .await?
    .ok_or(AppError::Core(CoreError::NotFound {
        entity: "TimeCategory",
        id: category_id,
    }))?;

    tracing::info!(category_id, user_id = auth.user_id, "Time category updated");

    Ok(Json(DataResponse { data: category }))
}

/// DELETE /api/v1/time/categories/{id}
///
/// Past sessions stay in the history as "Uncategorized".
pub async fn delete_category(
    auth: AuthUser,
    State(state): State<AppState>,
    Path(category_id): Path<DbId>,
) -> AppResult<impl IntoResponse> {
    if !TimeCategoryRepo::delete(&state.pool, category_id, auth.user_id).await? {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "TimeCategory",
            id: category_id,
        }));
    }
    tracing::info!(category_id, user_id = auth.user_id, "Time category deleted");
    Ok(StatusCode::NO_CONTENT)
}
