//! Calls the analytics functions defined in the database.

use disciplineos_core::types::DbId;
use sqlx::PgPool;

use crate::models::analytics::{DashboardAnalyticsRow, TimeAnalyticsRow};

pub struct AnalyticsRepo;

impl AnalyticsRepo {
    /// Seconds per time category over the last `days` days.
    pub async fn time_by_category(
        pool: &PgPool,
        user_id: DbId,
        days: i32,
    ) -> Result<Vec<TimeAnalyticsRow>, sqlx::Error> {
        sqlx::query_as::<_, TimeAnalyticsRow>(
            "SELECT category_name, total_seconds, category_color \
             FROM get_time_analytics($1, $2)",
        )
        .bind(user_id)
        .bind(days)
        .fetch_all(pool)
        .await
    }

    /// Time logged and mean goal progress per parent category.
    pub async fn goal_time(pool: &PgPool, user_id: DbId) -> Result<Vec<DashboardAnalyticsRow>, sqlx::Error> {
        sqlx::query_as::<_, DashboardAnalyticsRow>(
            "SELECT parent_category_name, total_seconds_logged, average_goal_progress \
             FROM get_dashboard_analytics($1)",
        )
        .bind(user_id)
        .fetch_all(pool)
        .await
    }
}
