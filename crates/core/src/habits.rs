//! Habit completion toggling and the consistency heatmap.

use std::collections::HashSet;

use chrono::{Datelike, Duration, Utc};
use serde::Serialize;

use crate::types::{Day, DbId};

/// Number of days shown in the habit heatmap.
pub const HEATMAP_DAYS: usize = 30;

/// The only frequency habits are created with.
pub const FREQUENCY_DAILY: &str = "daily";

/// Today's date in UTC, the bucket for completions and journal entries.
pub fn today() -> Day {
    Utc::now().date_naive()
}

/// What a toggle does to today's completion record.
///
/// A toggle is presence/absence, not a flag: it deletes the record if one
/// exists and inserts one otherwise. Two toggles restore the original state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToggleAction {
    Insert,
    Delete { completion_id: DbId },
}

impl ToggleAction {
    pub fn decide(existing_completion: Option<DbId>) -> Self {
        match existing_completion {
            Some(completion_id) => Self::Delete { completion_id },
            None => Self::Insert,
        }
    }

    /// Whether the habit counts as completed once the action is applied.
    pub fn completed_after(self) -> bool {
        matches!(self, Self::Insert)
    }
}

/// The `n` days ending at `end` (inclusive), oldest first.
pub fn last_n_days(end: Day, n: usize) -> Vec<Day> {
    (0..n as i64)
        .rev()
        .map(|offset| end - Duration::days(offset))
        .collect()
}

/// Minimal habit identity needed to draw a heatmap row.
#[derive(Debug, Clone)]
pub struct HabitRef {
    pub id: DbId,
    pub name: String,
}

/// One completion record: habit X was done on day Y.
#[derive(Debug, Clone, Copy)]
pub struct CompletionRef {
    pub habit_id: DbId,
    pub completed_on: Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HeatmapCell {
    pub date: Day,
    pub day_of_month: u32,
    pub completed: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct HeatmapRow {
    pub habit_id: DbId,
    pub habit_name: String,
    pub cells: Vec<HeatmapCell>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Heatmap {
    pub dates: Vec<Day>,
    pub rows: Vec<HeatmapRow>,
}

/// Build the habit x day grid for the `days` days ending at `end`.
///
/// Completions outside the window are ignored.
pub fn build_heatmap(habits: &[HabitRef], completions: &[CompletionRef], end: Day, days: usize) -> Heatmap {
    let done: HashSet<(DbId, Day)> = completions
        .iter()
        .map(|c| (c.habit_id, c.completed_on))
        .collect();
    let dates = last_n_days(end, days);

    let rows = habits
        .iter()
        .map(|habit| HeatmapRow {
            habit_id: habit.id,
            habit_name: habit.name.clone(),
            cells: dates
                .iter()
                .map(|&date| HeatmapCell {
                    date,
                    day_of_month: date.day(),
                    completed: done.contains(&(habit.id, date)),
                })
                .collect(),
        })
        .collect();

    Heatmap { dates, rows }
}
