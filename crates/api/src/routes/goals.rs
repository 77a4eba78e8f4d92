use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::goals;
use crate::state::AppState;

/// Routes mounted at `/goals`.
///
/// ```text
/// GET    /                -> list_goals
/// POST   /                -> create_goal
/// POST   /plan            -> plan_goal
/// PUT    /{id}            -> update_goal
/// DELETE /{id}            -> delete_goal
/// POST   /{id}/sub-tasks  -> create_sub_task
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(goals::list_goals).post(goals::create_goal))
        .route("/plan", post(goals::plan_goal))
        .route("/{id}", put(goals::update_goal).delete(goals::delete_goal))
        .route("/{id}/sub-tasks", post(goals::create_sub_task))
}

/// Routes mounted at `/sub-tasks`.
///
/// ```text
/// PUT    /{id}         -> update_sub_task
/// DELETE /{id}         -> delete_sub_task
/// POST   /{id}/toggle  -> toggle_sub_task
/// ```
pub fn sub_task_router() -> Router<AppState> {
    Router::new()
        .route("/{id}", put(goals::update_sub_task).delete(goals::delete_sub_task))
        .route("/{id}/toggle", post(goals::toggle_sub_task))
}
