//! Repository for the `time_sessions` table.

use disciplineos_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::models::time_session::{SessionHistoryRow, TimeSession};

const COLUMNS: &str = "\
    id, user_id, category_id, start_time, end_time, duration_seconds, \
    created_at, updated_at";

/// Default number of sessions in the history list.
pub const DEFAULT_HISTORY_LIMIT: i64 = 50;

/// Maximum number of sessions in the history list.
pub const MAX_HISTORY_LIMIT: i64 = 200;

pub struct TimeSessionRepo;

impl TimeSessionRepo {
    /// Insert an open session.
    pub async fn open(
        pool: &PgPool,
        user_id: DbId,
        category_id: DbId,
        start_time: Timestamp,
    ) -> Result<TimeSession, sqlx::Error> {
        let query = format!(
            "INSERT INTO time_sessions (user_id, category_id, start_time) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimeSession>(&query)
            .bind(user_id)
            .bind(category_id)
            .bind(start_time)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<TimeSession>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM time_sessions WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, TimeSession>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// Write end time and duration on an open session.
    ///
    /// Returns `None` if the session is missing, foreign, or already closed.
    pub async fn close(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        end_time: Timestamp,
        duration_seconds: i64,
    ) -> Result<Option<TimeSession>, sqlx::Error> {
        let query = format!(
            "UPDATE time_sessions SET end_time = $3, duration_seconds = $4 \
             WHERE id = $1 AND user_id = $2 AND end_time IS NULL \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimeSession>(&query)
            .bind(id)
            .bind(user_id)
            .bind(end_time)
            .bind(duration_seconds)
            .fetch_optional(pool)
            .await
    }

    /// Completed sessions, most recent first, joined with the category name.
    pub async fn history(
        pool: &PgPool,
        user_id: DbId,
        limit: Option<i64>,
    ) -> Result<Vec<SessionHistoryRow>, sqlx::Error> {
        let limit = limit.unwrap_or(DEFAULT_HISTORY_LIMIT).clamp(1, MAX_HISTORY_LIMIT);
        sqlx::query_as::<_, SessionHistoryRow>(
            "SELECT s.id, s.category_id, c.name AS category_name, c.color AS category_color, \
                    s.start_time, s.end_time, s.duration_seconds \
             FROM time_sessions s \
             LEFT JOIN time_categories c ON c.id = s.category_id \
             WHERE s.user_id = $1 AND s.end_time IS NOT NULL \
             ORDER BY s.start_time DESC, s.id DESC \
             LIMIT $2",
        )
        .bind(user_id)
        .bind(limit)
        .fetch_all(pool)
        .await
    }
}
