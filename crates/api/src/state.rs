use std::sync::Arc;

use disciplineos_ai::FeedbackService;

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// Cheap to clone: everything is either a pool handle or behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: disciplineos_db::DbPool,
    /// Server configuration (JWT settings are read by the auth extractor).
    pub config: Arc<ServerConfig>,
    /// AI coach. Tests swap in a stub.
    pub feedback: Arc<dyn FeedbackService>,
}
