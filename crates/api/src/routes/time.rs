use axum::routing::{get, post, put};
use axum::Router;

use crate::handlers::{categories, sessions};
use crate::state::AppState;

/// Routes mounted at `/time`.
///
/// ```text
/// GET    /parent-categories     -> list_parent_categories
/// GET    /categories            -> list_categories
/// POST   /categories            -> create_category
/// PUT    /categories/{id}       -> update_category
/// DELETE /categories/{id}       -> delete_category
/// POST   /sessions              -> start_session
/// GET    /sessions/history      -> session_history
/// POST   /sessions/{id}/stop    -> stop_session
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/parent-categories", get(categories::list_parent_categories))
        .route(
            "/categories",
            get(categories::list_categories).post(categories::create_category),
        )
        .route(
            "/categories/{id}",
            put(categories::update_category).delete(categories::delete_category),
        )
        .route("/sessions", post(sessions::start_session))
        .route("/sessions/history", get(sessions::session_history))
        .route("/sessions/{id}/stop", post(sessions::stop_session))
}
