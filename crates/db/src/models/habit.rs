//! Habit and habit-completion models.

use disciplineos_core::habits::{CompletionRef, HabitRef};
use disciplineos_core::types::{Day, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `habits` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Habit {
    pub id: DbId,
    pub user_id: DbId,
    pub name: String,
    pub frequency_type: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A habit plus whether it has a completion for the requested day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HabitWithStatus {
    pub id: DbId,
    pub name: String,
    pub frequency_type: String,
    pub completed_today: bool,
    pub created_at: Timestamp,
}

/// A row from the `habit_completions` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct HabitCompletion {
    pub id: DbId,
    pub habit_id: DbId,
    pub user_id: DbId,
    pub completed_at: Day,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl From<&Habit> for HabitRef {
    fn from(h: &Habit) -> Self {
        HabitRef { id: h.id, name: h.name.clone() }
    }
}

impl From<&HabitCompletion> for CompletionRef {
    fn from(c: &HabitCompletion) -> Self {
        CompletionRef { habit_id: c.habit_id, completed_on: c.completed_at }
    }
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateHabit {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateHabit {
    pub name: String,
}

/// Outcome of toggling a habit for a day.
#[derive(Debug, Clone, Serialize)]
pub struct HabitToggleResult {
    pub habit_id: DbId,
    pub date: Day,
    pub completed: bool,
}
