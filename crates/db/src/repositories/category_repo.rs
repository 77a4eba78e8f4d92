//! Repositories for `parent_categories` and `time_categories`.

use disciplineos_core::types::DbId;
use sqlx::PgPool;

use crate::models::category::{ParentCategory, TimeCategory};

const PARENT_COLUMNS: &str = "id, name, created_at, updated_at";

const COLUMNS: &str = "id, user_id, name, color, parent_category_id, created_at, updated_at";

/// Categories every new account starts with, as `(name, color)`.
pub const DEFAULT_TIME_CATEGORIES: &[(&str, &str)] = &[
    ("Work", "#3b82f6"),
    ("Study", "#10b981"),
    ("Exercise", "#f59e0b"),
];

pub struct ParentCategoryRepo;

impl ParentCategoryRepo {
    pub async fn list(pool: &PgPool) -> Result<Vec<ParentCategory>, sqlx::Error> {
        let query = format!("SELECT {PARENT_COLUMNS} FROM parent_categories ORDER BY name");
        sqlx::query_as::<_, ParentCategory>(&query)
            .fetch_all(pool)
            .await
    }

    pub async fn exists(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let row: (bool,) =
            sqlx::query_as("SELECT EXISTS (SELECT 1 FROM parent_categories WHERE id = $1)")
                .bind(id)
                .fetch_one(pool)
                .await?;
        Ok(row.0)
    }
}

pub struct TimeCategoryRepo;

impl TimeCategoryRepo {
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        name: &str,
        color: Option<&str>,
        parent_category_id: Option<DbId>,
    ) -> Result<TimeCategory, sqlx::Error> {
        let query = format!(
            "INSERT INTO time_categories (user_id, name, color, parent_category_id) \
             VALUES ($1, $2, $3, $4) \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimeCategory>(&query)
            .bind(user_id)
            .bind(name)
            .bind(color)
            .bind(parent_category_id)
            .fetch_one(pool)
            .await
    }

    /// Insert [`DEFAULT_TIME_CATEGORIES`] for a freshly created user.
    pub async fn seed_defaults(pool: &PgPool, user_id: DbId) -> Result<Vec<TimeCategory>, sqlx::Error> {
        let mut tx = pool.begin().await?;
        let created = Self::seed_defaults_inner(&mut tx, user_id).await?;
        tx.commit().await?;
        Ok(created)
    }

    pub(crate) async fn seed_defaults_inner(
        tx: &mut sqlx::Transaction<'_, sqlx::Postgres>,
        user_id: DbId,
    ) -> Result<Vec<TimeCategory>, sqlx::Error> {
        let query = format!(
            "INSERT INTO time_categories (user_id, name, color) \
             VALUES ($1, $2, $3) \
             RETURNING {COLUMNS}"
        );
        let mut created = Vec::with_capacity(DEFAULT_TIME_CATEGORIES.len());
        for (name, color) in DEFAULT_TIME_CATEGORIES {
            let category = sqlx::query_as::<_, TimeCategory>(&query)
                .bind(user_id)
                .bind(name)
                .bind(color)
                .fetch_one(&mut **tx)
                .await?;
            created.push(category);
        }
        Ok(created)
    }

    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<TimeCategory>, sqlx::Error> {
        let query = format!(
            "SELECT {COLUMNS} FROM time_categories WHERE user_id = $1 ORDER BY name, id"
        );
        sqlx::query_as::<_, TimeCategory>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    pub async fn find_by_id(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
    ) -> Result<Option<TimeCategory>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM time_categories WHERE id = $1 AND user_id = $2");
        sqlx::query_as::<_, TimeCategory>(&query)
            .bind(id)
            .bind(user_id)
            .fetch_optional(pool)
            .await
    }

    pub async fn update(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        name: &str,
        color: Option<&str>,
        parent_category_id: Option<DbId>,
    ) -> Result<Option<TimeCategory>, sqlx::Error> {
        let query = format!(
            "UPDATE time_categories SET name = $3, color = $4, parent_category_id = $5 \
             WHERE id = $1 AND user_id = $2 \
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, TimeCategory>(&query)
            .bind(id)
            .bind(user_id)
            .bind(name)
            .bind(color)
            .bind(parent_category_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a category. Its past sessions keep their rows with a NULL category.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM time_categories WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
