//! Daily journal entries.

use disciplineos_core::types::{Day, DbId, Timestamp};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row from the `journal_entries` table. One per user per day.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct JournalEntry {
    pub id: DbId,
    pub user_id: DbId,
    pub entry_date: Day,
    pub content: String,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

#[derive(Debug, Clone, Deserialize)]
pub struct UpsertJournalEntry {
    pub content: String,
}

/// Today's entry (if written) and everything older, newest first.
#[derive(Debug, Clone, Serialize)]
pub struct JournalOverview {
    pub today: Option<JournalEntry>,
    pub previous: Vec<JournalEntry>,
}
