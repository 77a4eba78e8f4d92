//! Session timer: the start/stop state machine behind the time tracker.
//!
//! ```text
//! Idle --start--> Running --stop--> Idle
//!                   |  ^
//!                   +--+ tick (elapsed += 1)
//! ```
//!
//! The timer keeps two clocks on purpose. `elapsed_seconds` is a display
//! counter advanced by [`TickClock`] and is never sent anywhere. The
//! authoritative duration is computed by the [`SessionGateway`] from the
//! stored start timestamp when the session is closed, so a suspended tab or a
//! sleeping laptop cannot skew logged time.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;
use serde::Serialize;
use tokio::sync::Mutex;
use tokio::time::{Instant, MissedTickBehavior};
use tokio_util::sync::CancellationToken;

use crate::error::CoreError;
use crate::time_tracking::format_clock;
use crate::types::{DbId, Timestamp};

/// Interval between display ticks.
pub const TICK_PERIOD: Duration = Duration::from_secs(1);

// ---------------------------------------------------------------------------
// Gateway
// ---------------------------------------------------------------------------

/// A session as recorded by the gateway once it has been closed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ClosedSession {
    pub session_id: DbId,
    pub category_id: Option<DbId>,
    pub start_time: Timestamp,
    pub end_time: Timestamp,
    pub duration_seconds: i64,
}

/// Persistence boundary for session start/stop.
///
/// Implementations own the durable session rows. Every call is scoped to the
/// requesting user; a session that does not exist or belongs to someone else
/// is reported as [`CoreError::NotFound`].
#[async_trait]
pub trait SessionGateway: Send + Sync {
    /// Record a new open session and return its identifier.
    async fn open_session(
        &self,
        user_id: DbId,
        category_id: DbId,
        start_time: Timestamp,
    ) -> Result<DbId, CoreError>;

    /// Close a session. The gateway reads the stored start time, computes the
    /// duration against its own clock, and persists end time and duration.
    async fn close_session(&self, session_id: DbId, user_id: DbId)
        -> Result<ClosedSession, CoreError>;
}

#[async_trait]
impl<T: SessionGateway + ?Sized> SessionGateway for Arc<T> {
    async fn open_session(
        &self,
        user_id: DbId,
        category_id: DbId,
        start_time: Timestamp,
    ) -> Result<DbId, CoreError> {
        (**self).open_session(user_id, category_id, start_time).await
    }

    async fn close_session(
        &self,
        session_id: DbId,
        user_id: DbId,
    ) -> Result<ClosedSession, CoreError> {
        (**self).close_session(session_id, user_id).await
    }
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

/// Whether a session is bound. The session id only exists while running.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerPhase {
    Idle,
    Running { session_id: DbId },
}

/// Errors surfaced by timer transitions.
#[derive(Debug, thiserror::Error)]
pub enum TimerError {
    #[error("Please select a category first.")]
    NoCategorySelected,

    #[error("Timer is already running (session {session_id})")]
    AlreadyRunning { session_id: DbId },

    #[error(transparent)]
    Gateway(#[from] CoreError),
}

/// Serializable view of the timer for display.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TimerSnapshot {
    pub is_running: bool,
    pub session_id: Option<DbId>,
    pub selected_category_id: Option<DbId>,
    pub elapsed_seconds: u64,
    pub display: String,
}

/// The start/stop state machine for one user.
pub struct SessionTimer<G> {
    user_id: DbId,
    gateway: G,
    phase: TimerPhase,
    selected_category_id: Option<DbId>,
    elapsed_seconds: u64,
}

impl<G: SessionGateway> SessionTimer<G> {
    /// Create an idle timer. `default_category` is preselected when given.
    pub fn new(user_id: DbId, gateway: G, default_category: Option<DbId>) -> Self {
        Self {
            user_id,
            gateway,
            phase: TimerPhase::Idle,
            selected_category_id: default_category,
            elapsed_seconds: 0,
        }
    }

    pub fn phase(&self) -> TimerPhase {
        self.phase
    }

    pub fn is_running(&self) -> bool {
        matches!(self.phase, TimerPhase::Running { .. })
    }

    pub fn session_id(&self) -> Option<DbId> {
        match self.phase {
            TimerPhase::Running { session_id } => Some(session_id),
            TimerPhase::Idle => None,
        }
    }

    pub fn selected_category_id(&self) -> Option<DbId> {
        self.selected_category_id
    }

    pub fn elapsed_seconds(&self) -> u64 {
        self.elapsed_seconds
    }

    pub fn gateway(&self) -> &G {
        &self.gateway
    }

    pub fn snapshot(&self) -> TimerSnapshot {
        TimerSnapshot {
            is_running: self.is_running(),
            session_id: self.session_id(),
            selected_category_id: self.selected_category_id,
            elapsed_seconds: self.elapsed_seconds,
            display: format_clock(self.elapsed_seconds as i64),
        }
    }

    /// Change the selected category. The selection is locked while running.
    pub fn select_category(&mut self, category_id: Option<DbId>) -> Result<(), TimerError> {
        if let TimerPhase::Running { session_id } = self.phase {
            return Err(TimerError::AlreadyRunning { session_id });
        }
        self.selected_category_id = category_id;
        Ok(())
    }

    /// Open a session for the selected category.
    ///
    /// Without a selection nothing is sent to the gateway. If the gateway
    /// fails the timer stays idle and keeps no partial session.
    pub async fn start(&mut self) -> Result<DbId, TimerError> {
        if let TimerPhase::Running { session_id } = self.phase {
            return Err(TimerError::AlreadyRunning { session_id });
        }
        let Some(category_id) = self.selected_category_id else {
            tracing::warn!(user_id = self.user_id, "Timer start rejected: no category selected");
            return Err(TimerError::NoCategorySelected);
        };

        let session_id = self
            .gateway
            .open_session(self.user_id, category_id, Utc::now())
            .await
            .inspect_err(|e| {
                tracing::error!(user_id = self.user_id, category_id, error = %e, "Failed to open session");
            })?;

        self.phase = TimerPhase::Running { session_id };
        self.elapsed_seconds = 0;
        tracing::info!(user_id = self.user_id, category_id, session_id, "Timer started");
        Ok(session_id)
    }

    /// Advance the display counter. Returns `false` (and does nothing) when idle.
    pub fn tick(&mut self) -> bool {
        if !self.is_running() {
            return false;
        }
        self.elapsed_seconds += 1;
        true
    }

    /// Close the bound session.
    ///
    /// Returns `Ok(None)` without touching anything when no session is bound.
    /// Only the session id goes to the gateway; the display counter is kept
    /// as-is afterwards so the final time stays visible until the next start.
    /// On gateway failure the timer remains running and the error is returned.
    pub async fn stop(&mut self) -> Result<Option<ClosedSession>, TimerError> {
        let TimerPhase::Running { session_id } = self.phase else {
            return Ok(None);
        };

        let closed = self
            .gateway
            .close_session(session_id, self.user_id)
            .await
            .inspect_err(|e| {
                tracing::error!(user_id = self.user_id, session_id, error = %e, "Failed to close session");
            })?;

        self.phase = TimerPhase::Idle;
        tracing::info!(
            user_id = self.user_id,
            session_id,
            duration_seconds = closed.duration_seconds,
            display_seconds = self.elapsed_seconds,
            "Timer stopped"
        );
        Ok(Some(closed))
    }
}

// ---------------------------------------------------------------------------
// Tick clock
// ---------------------------------------------------------------------------

/// Periodic driver that calls [`SessionTimer::tick`] once per period.
///
/// The task ends on its own once the timer reports it is idle, and is
/// cancelled when the clock is stopped or dropped.
pub struct TickClock {
    cancel: CancellationToken,
}

impl TickClock {
    /// Spawn the ticking task. The first tick fires one `period` from now.
    pub fn spawn<G>(timer: Arc<Mutex<SessionTimer<G>>>, period: Duration) -> Self
    where
        G: SessionGateway + 'static,
    {
        let cancel = CancellationToken::new();
        let token = cancel.clone();

        tokio::spawn(async move {
            let mut interval = tokio::time::interval_at(Instant::now() + period, period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                tokio::select! {
                    _ = token.cancelled() => break,
                    _ = interval.tick() => {
                        if !timer.lock().await.tick() {
                            break;
                        }
                    }
                }
            }
        });

        Self { cancel }
    }

    pub fn stop(&self) {
        self.cancel.cancel();
    }

    pub fn is_stopped(&self) -> bool {
        self.cancel.is_cancelled()
    }
}

impl Drop for TickClock {
    fn drop(&mut self) {
        self.cancel.cancel();
    }
}

/// A [`SessionTimer`] wired to its [`TickClock`].
///
/// The clock is spawned on a successful start and torn down on a successful
/// stop or when this value is dropped, so no ticking task outlives the timer.
pub struct LiveTimer<G> {
    timer: Arc<Mutex<SessionTimer<G>>>,
    clock: Option<TickClock>,
    period: Duration,
}

impl<G: SessionGateway + 'static> LiveTimer<G> {
    pub fn new(timer: SessionTimer<G>) -> Self {
        Self::with_period(timer, TICK_PERIOD)
    }

    pub fn with_period(timer: SessionTimer<G>, period: Duration) -> Self {
        Self {
            timer: Arc::new(Mutex::new(timer)),
            clock: None,
            period,
        }
    }

    pub async fn select_category(&self, category_id: Option<DbId>) -> Result<(), TimerError> {
        self.timer.lock().await.select_category(category_id)
    }

    pub async fn start(&mut self) -> Result<DbId, TimerError> {
        let session_id = self.timer.lock().await.start().await?;
        self.clock = Some(TickClock::spawn(Arc::clone(&self.timer), self.period));
        Ok(session_id)
    }

    pub async fn stop(&mut self) -> Result<Option<ClosedSession>, TimerError> {
        let closed = self.timer.lock().await.stop().await?;
        if closed.is_some() {
            if let Some(clock) = self.clock.take() {
                clock.stop();
            }
        }
        Ok(closed)
    }

    pub async fn snapshot(&self) -> TimerSnapshot {
        self.timer.lock().await.snapshot()
    }

    pub fn is_ticking(&self) -> bool {
        self.clock.as_ref().is_some_and(|c| !c.is_stopped())
    }
}
