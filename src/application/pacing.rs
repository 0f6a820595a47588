//! MessagePacer - delivers scheduled system messages after a delay.
//!
//! Each scheduled message becomes a tokio task that sleeps, locks the session
//! and hands the message to [`StrategySession::deliver`]. The wizard's epoch
//! check drops anything scheduled before a reset, so cancelling here only
//! tidies up tasks that would have been no-ops anyway.

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::config::PacingConfig;
use crate::domain::foundation::SessionId;
use crate::domain::session::StrategySession;
use crate::domain::wizard::{Pacing, ScheduledMessage};
use crate::ports::SharedSession;

/// Schedules delayed transcript entries per session.
#[derive(Debug, Clone)]
pub struct MessagePacer {
    config: PacingConfig,
    pending: Arc<Mutex<HashMap<SessionId, Vec<JoinHandle<()>>>>>,
}

impl MessagePacer {
    pub fn new(config: PacingConfig) -> Self {
        Self {
            config,
            pending: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    fn pending(&self) -> MutexGuard<'_, HashMap<SessionId, Vec<JoinHandle<()>>>> {
        self.pending.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Delay configured for a message's pacing class.
    pub fn delay_for(&self, pacing: Pacing) -> Duration {
        match pacing {
            Pacing::Opening => self.config.first_question_delay(),
            Pacing::FollowUp => self.config.follow_up_delay(),
        }
    }

    /// Delivers `message` now if its delay is zero, otherwise later.
    ///
    /// `session` must be the locked contents of `handle`.
    pub fn dispatch(
        &self,
        session: &mut StrategySession,
        handle: &SharedSession,
        message: ScheduledMessage,
    ) {
        let delay = self.delay_for(message.pacing());
        if delay.is_zero() {
            session.deliver(&message);
            return;
        }

        let session_id = session.id();
        let handle = handle.clone();
        let task = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let delivered = handle.lock().await.deliver(&message);
            if !delivered {
                tracing::debug!(%session_id, "Dropped stale scheduled message");
            }
        });

        let mut pending = self.pending();
        let tasks = pending.entry(session_id).or_default();
        tasks.retain(|t| !t.is_finished());
        tasks.push(task);
    }

    /// Aborts every undelivered message for a session.
    pub fn cancel(&self, session_id: SessionId) {
        if let Some(tasks) = self.pending().remove(&session_id) {
            for task in tasks {
                task.abort();
            }
        }
    }

    /// Number of scheduled messages not yet delivered.
    pub fn pending_count(&self, session_id: SessionId) -> usize {
        self.pending()
            .get(&session_id)
            .map(|tasks| tasks.iter().filter(|t| !t.is_finished()).count())
            .unwrap_or(0)
    }
}
