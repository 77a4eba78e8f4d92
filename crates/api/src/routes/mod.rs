pub mod auth;
pub mod dashboard;
pub mod goals;
pub mod habits;
pub mod health;
pub mod journals;
pub mod time;

use axum::Router;

use crate::state::AppState;

/// Build the `/api/v1` route tree.
///
/// ```text
/// /auth/signup                      create account (public)
/// /auth/login                       login (public)
/// /auth/me                          current user
///
/// /habits                           list, create
/// /habits/{id}                      rename, delete
/// /habits/{id}/toggle               toggle today's completion
///
/// /time/parent-categories           list shared parent categories
/// /time/categories                  list, create
/// /time/categories/{id}             update, delete
/// /time/sessions                    start
/// /time/sessions/history            recent sessions
/// /time/sessions/{id}/stop          stop
///
/// /goals                            list (with sub-tasks), create
/// /goals/plan                       AI next steps
/// /goals/{id}                       update, delete
/// /goals/{id}/sub-tasks             add sub-task
/// /sub-tasks/{id}                   rename, delete
/// /sub-tasks/{id}/toggle            flip completion
///
/// /journals                         today + previous
/// /journals/today                   upsert today's entry
/// /journals/analysis                AI reflection
/// /journals/{id}                    delete
///
/// /dashboard/time-chart             time per category
/// /dashboard/habit-heatmap          30-day grid
/// /dashboard/goal-time              time vs goal progress
/// /dashboard/analysis               AI commentary
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .nest("/habits", habits::router())
        .nest("/time", time::router())
        .nest("/goals", goals::router())
        .nest("/sub-tasks", goals::sub_task_router())
        .nest("/journals", journals::router())
        .nest("/dashboard", dashboard::router())
}
