//! Repository for the `journal_entries` table.

use disciplineos_core::types::{Day, DbId};
use sqlx::PgPool;

use crate::models::journal::{JournalEntry, JournalOverview};

const COLUMNS: &str = "id, user_id, entry_date, content, created_at, updated_at";

pub struct JournalRepo;

impl JournalRepo {
    /// Create or overwrite the entry for `day`.
    pub async fn upsert(
        pool: &PgPool,
        user_id: DbId,
        day: Day,
        content: &str,
    ) -> Result<JournalEntry, sqlx::Error> {
        let query = format!(
            "INSERT INTO journal_entries (user_id, entry_date, content) \
             VALUES ($1, $2, $3) \
             ON CONFLICT ON CONSTRAINT uq_journal_entries_user_day \
             DO UPDATE SET content = EXCLUDED.content \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, JournalEntry>(&query)
            .bind(user_id)
            .bind(day)
            .bind(content)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<JournalEntry>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM journal_entries WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, JournalEntry>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Split a user's entries into the one for `today` and all older ones.
    pub async fn overview(pool: &PgPool, user_id: DbId, today: Day) -> Result<JournalOverview, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM journal_entries \
             WHERE user_id = $1 AND entry_date <= $2 \
             ORDER BY entry_date DESC"
        );
        let mut entries = sqlx::query_as::<_, JournalEntry>(&query)
            .bind(user_id)
            .bind(today)
            .fetch_all(pool)
            .await?;

        let today_entry = if entries.first().is_some_and(|e| e.entry_date == today) {
            Some(entries.remove(0))
        } else {
            None
        };
        Ok(JournalOverview { today: today_entry, previous: entries })
    }

    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM journal_entries WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
