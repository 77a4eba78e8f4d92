//! Time session rows and history projection.

use disciplineos_core::types::{DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `time_sessions` table.
///
/// `end_time` and `duration_seconds` are `None` while the session is open.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct TimeSession {
    pub id: DbId,
    pub user_id: DbId,
    pub category_id: Option<DbId>,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub duration_seconds: Option<i64>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

impl TimeSession {
    pub fn is_open(&self) -> bool {
        self.end_time.is_none()
    }
}

/// Session joined with its category name for the history list.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct SessionHistoryRow {
    pub id: DbId,
    pub category_id: Option<DbId>,
    /// `None` when the category has been deleted.
    pub category_name: Option<String>,
    pub category_color: Option<String>,
    pub start_time: Timestamp,
    pub end_time: Option<Timestamp>,
    pub duration_seconds: Option<i64>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StartSession {
    pub category_id: Option<DbId>,
}

/// Query parameters for the history list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HistoryParams {
    pub limit: Option<i64>,
}
