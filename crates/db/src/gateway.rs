//! PostgreSQL-backed [`SessionGateway`].

use async_trait::async_trait;
use chrono::Utc;
use disciplineos_core::error::CoreError;
use disciplineos_core::time_tracking::duration_seconds;
use disciplineos_core::timer::{ClosedSession, SessionGateway};
use disciplineos_core::types::{DbId, Timestamp};
use sqlx::PgPool;

use crate::repositories::{TimeCategoryRepo, TimeSessionRepo};

/// Opens and closes rows in `time_sessions`.
///
/// Durations are always computed here from the stored start time and the
/// server clock at close.
#[derive(Debug, Clone)]
pub struct PgSessionGateway {
    pool: PgPool,
}

impl PgSessionGateway {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

fn db_error(e: sqlx::Error) -> CoreError {
    CoreError::Internal(format!("Database error: {e}"))
}

#[async_trait]
impl SessionGateway for PgSessionGateway {
    async fn open_session(
        &self,
        user_id: DbId,
        category_id: DbId,
        start_time: Timestamp,
    ) -> Result<DbId, CoreError> {
        TimeCategoryRepo::find_by_id(&self.pool, category_id, user_id)
            .await
            .map_err(db_error)?
            .ok_or(CoreError::NotFound {
                entity: "TimeCategory",
                id: category_id,
            })?;

        let session = TimeSessionRepo::open(&self.pool, user_id, category_id, start_time)
            .await
            .map_err(db_error)?;
        tracing::info!(session_id = session.id, user_id, category_id, "Time session opened");
        Ok(session.id)
    }

    async fn close_session(
        &self,
        session_id: DbId,
        user_id: DbId,
    ) -> Result<ClosedSession, CoreError> {
        let session = TimeSessionRepo::find_by_id(&self.pool, session_id, user_id)
            .await
            .map_err(db_error)?
            .ok_or(CoreError::NotFound {
                entity: "TimeSession",
                id: session_id,
            })?;
        if !session.is_open() {
            return Err(CoreError::Conflict(format!(
                "Session {session_id} is already stopped"
            )));
        }

        let end_time = Utc::now();
        let duration = duration_seconds(session.start_time, end_time);

        // The update only matches open rows, so a concurrent stop loses here.
        let closed = TimeSessionRepo::close(&self.pool, session_id, user_id, end_time, duration)
            .await
            .map_err(db_error)?
            .ok_or_else(|| CoreError::Conflict(format!("Session {session_id} is already stopped")))?;

        tracing::info!(
            session_id,
            user_id,
            duration_seconds = duration,
            "Time session closed"
        );
        Ok(ClosedSession {
            session_id: closed.id,
            category_id: closed.category_id,
            start_time: closed.start_time,
            end_time,
            duration_seconds: duration,
        })
    }
}
