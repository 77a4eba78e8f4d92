//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument. Every per-user query is
//! scoped by `user_id`; a row owned by someone else behaves as missing.

pub mod analytics_repo;
pub mod category_repo;
pub mod goal_repo;
pub mod habit_repo;
pub mod journal_repo;
pub mod time_session_repo;
pub mod user_repo;

pub use analytics_repo::AnalyticsRepo;
pub use category_repo::{ParentCategoryRepo, TimeCategoryRepo};
pub use goal_repo::{GoalRepo, SubTaskRepo};
pub use habit_repo::HabitRepo;
pub use journal_repo::JournalRepo;
pub use time_session_repo::TimeSessionRepo;
pub use user_repo::UserRepo;
