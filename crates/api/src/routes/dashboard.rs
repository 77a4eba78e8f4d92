use axum::routing::get;
use axum::Router;

use crate::handlers::dashboard;
use crate::state::AppState;

/// Routes mounted at `/dashboard`.
///
/// ```text
/// GET /time-chart     -> time_chart_data
/// GET /habit-heatmap  -> habit_heatmap
/// GET /goal-time      -> goal_time
/// GET /analysis       -> analysis
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/time-chart", get(dashboard::time_chart_data))
        .route("/habit-heatmap", get(dashboard::habit_heatmap))
        .route("/goal-time", get(dashboard::goal_time))
        .route("/analysis", get(dashboard::analysis))
}
