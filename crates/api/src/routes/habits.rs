use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::habits;
use crate::state::AppState;

/// Routes mounted at `/habits`.
///
/// ```text
/// GET    /             -> list_habits
/// POST   /             -> create_habit
/// PUT    /{id}         -> update_habit
/// DELETE /{id}         -> delete_habit
/// POST   /{id}/toggle  -> toggle_habit
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(habits::list_habits).post(habits::create_habit))
        .route("/{id}", put(habits::update_habit).delete(habits::delete_habit))
        .route("/{id}/toggle", post(habits::toggle_habit))
}
