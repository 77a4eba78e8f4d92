//! Rows returned by the analytics database functions.

use disciplineos_core::analytics::{GoalTimeInput, TimeByCategoryInput};
use serde::Serialize;
use sqlx::FromRow;

/// One row of `get_time_analytics`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimeAnalyticsRow {
    pub category_name: String,
    pub total_seconds: i64,
    pub category_color: Option<String>,
}

/// One row of `get_dashboard_analytics`.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct DashboardAnalyticsRow {
    pub parent_category_name: String,
    pub total_seconds_logged: i64,
    pub average_goal_progress: Option<f64>,
}

impl From<TimeAnalyticsRow> for TimeByCategoryInput {
    fn from(r: TimeAnalyticsRow) -> Self {
        TimeByCategoryInput {
            category_name: r.category_name,
            total_seconds: r.total_seconds,
            category_color: r.category_color,
        }
    }
}

impl From<DashboardAnalyticsRow> for GoalTimeInput {
    fn from(r: DashboardAnalyticsRow) -> Self {
        GoalTimeInput {
            parent_category_name: r.parent_category_name,
            total_seconds_logged: r.total_seconds_logged,
            average_goal_progress: r.average_goal_progress,
        }
    }
}
