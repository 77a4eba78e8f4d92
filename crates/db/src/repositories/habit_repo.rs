//! Repository for `habits` and `habit_completions`.

use disciplineos_core::habits::{ToggleAction, FREQUENCY_DAILY};
use disciplineos_core::types::{Day, DbId};
use sqlx::PgPool;

use crate::models::habit::{Habit, HabitCompletion, HabitWithStatus};

const COLUMNS: &str = "id, user_id, name, frequency_type, created_at, updated_at";

const COMPLETION_COLUMNS: &str = "id, habit_id, user_id, completed_at, created_at, updated_at";

pub struct HabitRepo;

impl HabitRepo {
    // -----------------------------------------------------------------------
    // Habit CRUD
    // -----------------------------------------------------------------------

    pub async fn create(pool: &PgPool, user_id: DbId, name: &str) -> Result<Habit, sqlx::Error> {
        let query = format!(
            "INSERT INTO habits (user_id, name, frequency_type) VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Habit>(&query)
            .bind(user_id)
            .bind(name)
            .bind(FREQUENCY_DAILY)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId, user_id: DbId) -> Result<Option<Habit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM habits WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Habit>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Habit>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM habits WHERE user_id = $1 ORDER BY created_at, id");
        sqlx::query_as::<_, Habit>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// All habits with a flag for whether each was completed on `day`.
    pub async fn list_with_status(
        pool: &PgPool,
        user_id: DbId,
        day: Day,
    ) -> Result<Vec<HabitWithStatus>, sqlx::Error> {
        sqlx::query_as::<_, HabitWithStatus>(
            "SELECT h.id, h.name, h.frequency_type, \
                    EXISTS (SELECT 1 FROM habit_completions c \
                            WHERE c.habit_id = h.id AND c.user_id = h.user_id \
                              AND c.completed_at = $2) AS completed_today, \
                    h.created_at \
             FROM habits h \
             WHERE h.user_id = $1 \
             ORDER BY h.created_at DESC, h.id DESC",
        )
        .bind(user_id)
        .bind(day)
        .fetch_all(pool)
        .await
    }

    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        name: &str,
    ) -> Result<Option<Habit>, sqlx::Error> {
        let query = format!(
            "UPDATE habits SET name = $3 WHERE id = $1 AND user_id = $2 RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Habit>(&query)
            .bind(id)
            .bind(user_id)
            .bind(name)
            .fetch_optional(pool)
            .await
    }

    /// Delete a habit; its completions cascade.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM habits WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    // -----------------------------------------------------------------------
    // Completions
    // -----------------------------------------------------------------------

    pub async fn find_completion(
        pool: &PgPool,
        habit_id: DbId,
        user_id: DbId,
        day: Day,
    ) -> Result<Option<DbId>, sqlx::Error> {
        let row: Option<(DbId,)> = sqlx::query_as(
            "SELECT id FROM habit_completions \
             WHERE habit_id = $1 AND user_id = $2 AND completed_at = $3",
        )
        .bind(habit_id)
        .bind(user_id)
        .bind(day)
        .fetch_optional(pool)
        .await?;
        Ok(row.map(|r| r.0))
    }

    /// Flip the completion for `day`: delete it if present, insert otherwise.
    ///
    /// Returns whether the habit is completed afterwards. The caller must have
    /// checked that the habit belongs to `user_id`.
    pub async fn toggle_completion(
        pool: &PgPool,
        habit_id: DbId,
        user_id: DbId,
        day: Day,
    ) -> Result<bool, sqlx::Error> {
        let existing = Self::find_completion(pool, habit_id, user_id, day).await?;
        let action = ToggleAction::decide(existing);
        match action {
            ToggleAction::Insert => {
                sqlx::query(
                    "INSERT INTO habit_completions (habit_id, user_id, completed_at) \
                     VALUES ($1, $2, $3) \
                     ON CONFLICT ON CONSTRAINT uq_habit_completions_habit_user_day DO NOTHING",
                )
                .bind(habit_id)
                .bind(user_id)
                .bind(day)
                .execute(pool)
                .await?;
            }
            ToggleAction::Delete { completion_id } => {
                sqlx::query("DELETE FROM habit_completions WHERE id = $1 AND user_id = $2")
                    .bind(completion_id)
                    .bind(user_id)
                    .execute(pool)
                    .await?;
            }
        }
        Ok(action.completed_after())
    }

    /// Completions on or after `since`, for the heatmap.
    pub async fn completions_since(
        pool: &PgPool,
        user_id: DbId,
        since: Day,
    ) -> Result<Vec<HabitCompletion>, sqlx::Error> {
        let query = format!(
            "SELECT {COMPLETION_COLUMNS} FROM habit_completions \
             WHERE user_id = $1 AND completed_at >= $2 \
             ORDER BY completed_at"
        );
        sqlx::query_as::<_, HabitCompletion>(&query)
            .bind(user_id)
            .bind(since)
            .fetch_all(pool)
            .await
    }
}
