use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::handlers::journals;
use crate::state::AppState;

/// Routes mounted at `/journals`.
///
/// ```text
/// GET    /           -> list_journals
/// PUT    /today      -> upsert_today
/// POST   /analysis   -> analyze_journal
/// DELETE /{id}       -> delete_journal
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(journals::list_journals))
        .route("/today", put(journals::upsert_today))
        .route("/analysis", post(journals::analyze_journal))
        .route("/{id}", delete(journals::delete_journal))
}
