//! The analytics database functions.

use chrono::{Duration, Utc};
use disciplineos_core::analytics::{goal_time_chart, ChartData, GoalTimeInput};
use disciplineos_db::models::user::CreateUser;
use disciplineos_db::repositories::{
    AnalyticsRepo, GoalRepo, SubTaskRepo, TimeCategoryRepo, TimeSessionRepo, UserRepo,
};
use sqlx::PgPool;

async fn new_user(pool: &PgPool) -> i64 {
    UserRepo::create(
        pool,
        &CreateUser {
            email: "u@example.com".into(),
            password_hash: "hash".into(),
        },
    )
    .await
    .unwrap()
    .id
}

async fn parent_id(pool: &PgPool, name: &str) -> i64 {
    let (id,): (i64,) = sqlx::query_as("SELECT id FROM parent_categories WHERE name = $1")
        .bind(name)
        .fetch_one(pool)
        .await
        .unwrap();
    id
}

async fn logged(pool: &PgPool, user: i64, category: i64, days_ago: i64, seconds: i64) {
    let start = Utc::now() - Duration::days(days_ago);
    let s = TimeSessionRepo::open(pool, user, category, start).await.unwrap();
    TimeSessionRepo::close(pool, s.id, user, start + Duration::seconds(seconds), seconds)
        .await
        .unwrap();
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn time_analytics_sums_closed_sessions_in_window(pool: PgPool) {
    let user = new_user(&pool).await;
    let work = TimeCategoryRepo::create(&pool, user, "Work", Some("#ff0000"), None).await.unwrap();
    let gym = TimeCategoryRepo::create(&pool, user, "Gym", None, None).await.unwrap();

    logged(&pool, user, work.id, 1, 3600).await;
    logged(&pool, user, work.id, 2, 1800).await;
    logged(&pool, user, gym.id, 3, 600).await;
    // Outside a 7-day window.
    logged(&pool, user, gym.id, 10, 9999).await;
    // Still open, never counted.
    TimeSessionRepo::open(&pool, user, work.id, Utc::now()).await.unwrap();

    let rows = AnalyticsRepo::time_by_category(&pool, user, 7).await.unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].category_name, "Work");
    assert_eq!(rows[0].total_seconds, 5400);
    assert_eq!(rows[0].category_color.as_deref(), Some("#ff0000"));
    assert_eq!(rows[1].category_name, "Gym");
    assert_eq!(rows[1].total_seconds, 600);
    assert_eq!(rows[1].category_color, None);

    let month = AnalyticsRepo::time_by_category(&pool, user, 30).await.unwrap();
    assert_eq!(month.iter().map(|r| r.total_seconds).sum::<i64>(), 5400 + 600 + 9999);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn dashboard_analytics_joins_time_and_goal_progress(pool: PgPool) {
    let user = new_user(&pool).await;
    let career = parent_id(&pool, "Career").await;
    let health = parent_id(&pool, "Health").await;

    let work = TimeCategoryRepo::create(&pool, user, "Work", None, Some(career)).await.unwrap();
    logged(&pool, user, work.id, 1, 5400).await;

    // Two goals under Career: 50% and 100% -> mean 75%.
    let g1 = GoalRepo::create(&pool, user, "Promotion", None, Some(career)).await.unwrap();
    let t1 = SubTaskRepo::create(&pool, g1.id, user, "Review").await.unwrap();
    SubTaskRepo::create(&pool, g1.id, user, "Present").await.unwrap();
    SubTaskRepo::toggle(&pool, t1.id, user).await.unwrap();

    let g2 = GoalRepo::create(&pool, user, "Certification", None, Some(career)).await.unwrap();
    let t2 = SubTaskRepo::create(&pool, g2.id, user, "Exam").await.unwrap();
    SubTaskRepo::toggle(&pool, t2.id, user).await.unwrap();

    // A goal under Health with no time logged there.
    GoalRepo::create(&pool, user, "Run 10k", None, Some(health)).await.unwrap();

    let rows = AnalyticsRepo::goal_time(&pool, user).await.unwrap();
    assert_eq!(rows.len(), 2);

    let career_row = rows.iter().find(|r| r.parent_category_name == "Career").unwrap();
    assert_eq!(career_row.total_seconds_logged, 5400);
    assert_eq!(career_row.average_goal_progress, Some(75.0));

    let health_row = rows.iter().find(|r| r.parent_category_name == "Health").unwrap();
    assert_eq!(health_row.total_seconds_logged, 0);
    assert_eq!(health_row.average_goal_progress, Some(0.0));

    let inputs: Vec<GoalTimeInput> = rows.into_iter().map(Into::into).collect();
    let ChartData::Rows { rows: chart } = goal_time_chart(&inputs) else {
        panic!("expected rows");
    };
    let career_bar = chart.iter().find(|r| r.name == "Career").unwrap();
    assert_eq!(career_bar.time_hours, 1.5);
    assert_eq!(career_bar.progress_percent, 75.0);
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn analytics_empty_for_new_user(pool: PgPool) {
    let user = new_user(&pool).await;
    assert!(AnalyticsRepo::time_by_category(&pool, user, 7).await.unwrap().is_empty());
    assert!(AnalyticsRepo::goal_time(&pool, user).await.unwrap().is_empty());
}

#[sqlx::test(migrations = "../../db/migrations")]
async fn deleted_category_time_is_uncategorized_in_time_chart_only(pool: PgPool) {
    let user = new_user(&pool).await;
    let career = parent_id(&pool, "Career").await;
    let piano = TimeCategoryRepo::create(&pool, user, "Piano", Some("#aa00ff"), Some(career))
        .await
        .unwrap();
    logged(&pool, user, piano.id, 1, 1200).await;
    assert!(TimeCategoryRepo::delete(&pool, piano.id, user).await.unwrap());

    let rows = AnalyticsRepo::time_by_category(&pool, user, 7).await.unwrap();
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].category_name, "Uncategorized");
    assert_eq!(rows[0].total_seconds, 1200);
    assert_eq!(rows[0].category_color, None);

    // No category means no parent category to roll up into.
    assert!(AnalyticsRepo::goal_time(&pool, user).await.unwrap().is_empty());
}
