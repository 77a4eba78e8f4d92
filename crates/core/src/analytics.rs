//! Dashboard formatting: raw aggregation rows to chart-ready series.
//!
//! All grouping and averaging happens in the database procedures
//! (`get_time_analytics`, `get_dashboard_analytics`). The functions here are
//! one-to-one maps plus an empty-input placeholder.

use serde::Serialize;

use crate::time_tracking::{format_hours_minutes, SECS_PER_HOUR};

/// Fallback slice color when a category has none.
pub const DEFAULT_CHART_COLOR: &str = "#8884d8";

/// Placeholder for the goal-vs-time chart when there is nothing to show.
pub const GOAL_CHART_EMPTY_MESSAGE: &str =
    "No goal or time data found. Link your goals to a category and track time to see insights here.";

/// Placeholder AI observation when the user has no analytics yet.
pub const NO_DATA_OBSERVATION: &str = "No data yet.";

/// Placeholder AI suggestion when the user has no analytics yet.
pub const NO_DATA_SUGGESTION: &str =
    "Track some time against your goals, and I'll provide an analysis here.";

/// Placeholder for the time chart.
pub fn time_chart_empty_message(days: i32) -> String {
    format!("No time tracked in the last {days} days.")
}

/// Round to `places` decimal places, half away from zero.
pub fn round_to(value: f64, places: u32) -> f64 {
    let factor = 10_f64.powi(places as i32);
    (value * factor).round() / factor
}

/// Convert seconds to hours rounded to `places` decimals.
pub fn seconds_to_hours(total_seconds: i64, places: u32) -> f64 {
    round_to(total_seconds as f64 / SECS_PER_HOUR as f64, places)
}

/// Either chart rows or a human-readable placeholder.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ChartData<T> {
    Rows { rows: Vec<T> },
    Empty { message: String },
}

impl<T> ChartData<T> {
    fn from_rows(rows: Vec<T>, message: impl FnOnce() -> String) -> Self {
        if rows.is_empty() {
            Self::Empty { message: message() }
        } else {
            Self::Rows { rows }
        }
    }
}

// ---------------------------------------------------------------------------
// Goal vs. time
// ---------------------------------------------------------------------------

/// Input row: one parent category with time logged and mean goal progress.
#[derive(Debug, Clone)]
pub struct GoalTimeInput {
    pub parent_category_name: String,
    pub total_seconds_logged: i64,
    /// Mean goal progress in percent (0-100), `None` when no goals exist.
    pub average_goal_progress: Option<f64>,
}

/// Bar chart row: hours and progress, both at two decimals.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalTimeChartRow {
    pub name: String,
    pub time_hours: f64,
    pub progress_percent: f64,
}

pub fn goal_time_chart(rows: &[GoalTimeInput]) -> ChartData<GoalTimeChartRow> {
    let mapped = rows
        .iter()
        .map(|r| GoalTimeChartRow {
            name: r.parent_category_name.clone(),
            time_hours: seconds_to_hours(r.total_seconds_logged, 2),
            progress_percent: round_to(r.average_goal_progress.unwrap_or(0.0), 2),
        })
        .collect();
    ChartData::from_rows(mapped, || GOAL_CHART_EMPTY_MESSAGE.to_string())
}

/// Row sent to the AI coach: coarser one-decimal rounding.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoachInputRow {
    pub category: String,
    pub time_spent_hours: f64,
    pub goal_progress_percent: f64,
}

pub fn coach_input(rows: &[GoalTimeInput]) -> Vec<CoachInputRow> {
    rows.iter()
        .map(|r| CoachInputRow {
            category: r.parent_category_name.clone(),
            time_spent_hours: seconds_to_hours(r.total_seconds_logged, 1),
            goal_progress_percent: round_to(r.average_goal_progress.unwrap_or(0.0), 1),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Time per category
// ---------------------------------------------------------------------------

/// Input row: seconds logged per category over a window.
#[derive(Debug, Clone)]
pub struct TimeByCategoryInput {
    pub category_name: String,
    pub total_seconds: i64,
    pub category_color: Option<String>,
}

/// Pie slice: label includes the `Xh Ym` total, value stays in seconds.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimeSlice {
    pub name: String,
    pub value: i64,
    pub color: String,
}

pub fn time_chart(rows: &[TimeByCategoryInput], days: i32) -> ChartData<TimeSlice> {
    let mapped = rows
        .iter()
        .map(|r| TimeSlice {
            name: format!("{} ({})", r.category_name, format_hours_minutes(r.total_seconds)),
            value: r.total_seconds,
            color: r
                .category_color
                .clone()
                .filter(|c| !c.is_empty())
                .unwrap_or_else(|| DEFAULT_CHART_COLOR.to_string()),
        })
        .collect();
    ChartData::from_rows(mapped, || time_chart_empty_message(days))
}
