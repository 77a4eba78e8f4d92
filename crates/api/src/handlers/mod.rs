pub mod auth;
pub mod categories;
pub mod dashboard;
pub mod goals;
pub mod habits;
pub mod journals;
pub mod sessions;
