//! Repositories for `goals` and `sub_tasks`.

use disciplineos_core::goals::progress_percent;
use disciplineos_core::types::DbId;
use sqlx::PgPool;

use crate::models::goal::{Goal, GoalWithSubTasks, SubTask};
use crate::repositories::ParentCategoryRepo;

const COLUMNS: &str = "id, user_id, title, priority, parent_category_id, created_at, updated_at";

const SUB_TASK_COLUMNS: &str = "id, goal_id, user_id, title, is_completed, created_at, updated_at";

/// Priority used when the client does not send one.
pub const DEFAULT_PRIORITY: i32 = 1;

pub struct GoalRepo;

impl GoalRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        title: &str,
        priority: Option<i32>,
        parent_category_id: Option<DbId>,
    ) -> Result<Goal, sqlx::Error> {
        let query = format!(
            "INSERT INTO goals (user_id, title, priority, parent_category_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(user_id)
            .bind(title)
            .bind(priority.unwrap_or(DEFAULT_PRIORITY))
            .bind(parent_category_id)
            .fetch_one(pool)
            .await
    }

    pub async fn find_by_id(pool: &PgPool, id: DbId, user_id: DbId) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM goals WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    /// All goals for a user, newest first, with sub-tasks attached, the
    /// parent category name resolved and progress computed.
    pub async fn list_with_sub_tasks(
        pool: &PgPool,
        user_id: DbId,
    ) -> Result<Vec<GoalWithSubTasks>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM goals WHERE user_id = $1 ORDER BY created_at DESC, id DESC"
        );
        let goals = sqlx::query_as::<_, Goal>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await?;

        let tasks = SubTaskRepo::list_for_user(pool, user_id).await?;
        let parents = ParentCategoryRepo::list(pool).await?;

        Ok(goals
            .into_iter()
            .map(|goal| {
                let sub_tasks: Vec<SubTask> =
                    tasks.iter().filter(|t| t.goal_id == goal.id).cloned().collect();
                let done = sub_tasks.iter().filter(|t| t.is_completed).count();
                let parent_category_name = goal.parent_category_id.and_then(|pid| {
                    parents.iter().find(|p| p.id == pid).map(|p| p.name.clone())
                });
                GoalWithSubTasks {
                    parent_category_name,
                    progress_percent: progress_percent(done, sub_tasks.len()),
                    goal,
                    sub_tasks,
                }
            })
            .collect())
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        title: &str,
        priority: Option<i32>,
        parent_category_id: Option<DbId>,
    ) -> Result<Option<Goal>, sqlx::Error> {
        let query = format!(
            "UPDATE goals SET title = $3, priority = COALESCE($4, priority), \
                 parent_category_id = $5 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Goal>(&query)
            .bind(id)
            .bind(user_id)
            .bind(title)
            .bind(priority)
            .bind(parent_category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a goal; its sub-tasks cascade.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM goals WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

pub struct SubTaskRepo;

impl SubTaskRepo {
    pub async fn create(
        pool: &PgPool,
        goal_id: DbId,
        user_id: DbId,
        title: &str,
    ) -> Result<SubTask, sqlx::Error> {
        let query = format!(
            "INSERT INTO sub_tasks (goal_id, user_id, title) VALUES ($1, $2, $3) \
             RETURNING {SUB_TASK_COLUMNS}"
        );
        sqlx::query_as::<_, SubTask>(&query)
            .bind(goal_id)
            .bind(user_id)
            .bind(title)
            .fetch_one(pool)
            .await
    }

    pub async fn list_for_goal(
        pool: &PgPool,
        goal_id: DbId,
        user_id: DbId,
    ) -> Result<Vec<SubTask>, sqlx::Error> {
        let query = format!(
            "SELECT {SUB_TASK_COLUMNS} FROM sub_tasks \
             WHERE goal_id = $1 AND user_id = $2 \
             ORDER BY created_at, id"
        );
        sqlx::query_as::<_, SubTask>(&query)
            .bind(goal_id)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<SubTask>, sqlx::Error> {
        let query = format!(
            "SELECT {SUB_TASK_COLUMNS} FROM sub_tasks WHERE user_id = $1 ORDER BY created_at, id"
        );
        sqlx::query_as::<_, SubTask>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn rename(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        title: &str,
    ) -> Result<Option<SubTask>, sqlx::Error> {
        let query = format!(
            "UPDATE sub_tasks SET title = $3 WHERE id = $1 AND user_id = $2 \
             RETURNING {SUB_TASK_COLUMNS}"
        );
        sqlx::query_as::<_, SubTask>(&query)
            .bind(id)
            .bind(user_id)
            .bind(title)
            .fetch_optional(pool)
            .await
    }

    /// Flip `is_completed` in a single statement.
    pub async fn toggle(pool: &PgPool, id: DbId, user_id: DbId) -> Result<Option<SubTask>, sqlx::Error> {
        let query = format!(
            "UPDATE sub_tasks SET is_completed = NOT is_completed \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {SUB_TASK_COLUMNS}"
        );
        sqlx::query_as::<_, SubTask>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM sub_tasks WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
