//! Goals and their sub-tasks.

use disciplineos_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `goals` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct Goal {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub priority: i32,
    pub parent_category_id: Option<DbId>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A row from the `sub_tasks` table.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SubTask {
    pub id: DbId,
    pub goal_id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub is_completed: bool,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A goal with its sub-tasks and derived completion percentage.
#[derive(Debug, Clone, Serialize)]
pub struct GoalWithSubTasks {
    #[serde(flatten)]
    pub goal: Goal,
    pub parent_category_name: Option<String>,
    pub sub_tasks: Vec<SubTask>,
    pub progress_percent: f64,
}

// ---------------------------------------------------------------------------
// DTOs
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct CreateGoal {
    pub title: String,
    pub priority: Option<i32>,
    pub parent_category_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateGoal {
    pub title: String,
    pub priority: Option<i32>,
    pub parent_category_id: Option<DbId>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateSubTask {
    pub title: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpdateSubTask {
    pub title: String,
}
