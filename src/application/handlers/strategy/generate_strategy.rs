//! GenerateStrategyHandler - the single outbound generation call.
//!
//! The session lock is held only to admit the call and to record its result,
//! never across the network round trip, so the transcript stays readable and
//! "Start Over" stays usable while a call is outstanding. The call runs on its
//! own task and always records its result, even when the request that started
//! it goes away.

use std::sync::Arc;
use std::time::Duration;

use crate::application::SessionView;
use crate::domain::foundation::SessionId;
use crate::domain::session::SessionError;
use crate::domain::strategy::GenerationTicket;
use crate::ports::{GenerationError, SessionStore, SharedSession, StrategyGenerator};

use super::super::find_session;

/// How a generation call ended.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenerationOutcome {
    /// A new document replaced the previous one.
    Generated,
    /// The call failed; any previous document is kept and a notice is set.
    Failed(GenerationError),
    /// The session was reset while the call was outstanding; the result was dropped.
    Discarded,
}

/// Result of a generation request.
#[derive(Debug, Clone)]
pub struct GenerateStrategyResult {
    pub view: SessionView,
    pub outcome: GenerationOutcome,
}

/// Handler for strategy generation.
pub struct GenerateStrategyHandler {
    store: Arc<dyn SessionStore>,
    generator: Arc<dyn StrategyGenerator>,
    timeout: Duration,
}

impl GenerateStrategyHandler {
    pub fn new(
        store: Arc<dyn SessionStore>,
        generator: Arc<dyn StrategyGenerator>,
        timeout: Duration,
    ) -> Self {
        Self {
            store,
            generator,
            timeout,
        }
    }

    /// Runs one generation call.
    ///
    /// # Errors
    ///
    /// - `WizardIncomplete` if fewer than five answers were collected
    /// - `GenerationInProgress` if a call is already outstanding
    ///
    /// Service failures are not errors here; they come back as
    /// [`GenerationOutcome::Failed`] with the notice already recorded.
    pub async fn handle(&self, session_id: SessionId) -> Result<GenerateStrategyResult, SessionError> {
        let handle = find_session(self.store.as_ref(), session_id).await?;

        let ticket = handle.lock().await.begin_generation()?;
        tracing::info!(
            %session_id,
            ticket = ticket.id(),
            generator = self.generator.name(),
            "Generating strategy"
        );

        // Detached so a dropped request still releases the ticket.
        let call = tokio::spawn(run_generation(
            session_id,
            handle.clone(),
            self.generator.clone(),
            self.timeout,
            ticket.clone(),
        ));

        match call.await {
            Ok(result) => Ok(result),
            Err(err) => {
                tracing::error!(%session_id, error = %err, "Generation task did not finish");
                let mut session = handle.lock().await;
                let outcome = if session.fail_generation(ticket) {
                    GenerationOutcome::Failed(GenerationError::network(format!(
                        "generation task did not finish: {}",
                        err
                    )))
                } else {
                    GenerationOutcome::Discarded
                };
                Ok(GenerateStrategyResult {
                    view: SessionView::from(&*session),
                    outcome,
                })
            }
        }
    }
}

async fn run_generation(
    session_id: SessionId,
    handle: SharedSession,
    generator: Arc<dyn StrategyGenerator>,
    timeout: Duration,
    ticket: GenerationTicket,
) -> GenerateStrategyResult {
    let result = match tokio::time::timeout(timeout, generator.generate(ticket.answers())).await {
        Ok(result) => result,
        Err(_) => Err(GenerationError::Timeout {
            timeout_ms: timeout.as_millis() as u64,
        }),
    };

    let mut session = handle.lock().await;
    let outcome = match result {
        Ok(document) => {
            if session.complete_generation(ticket, document) {
                tracing::info!(%session_id, "Strategy generated");
                GenerationOutcome::Generated
            } else {
                tracing::debug!(%session_id, "Discarded strategy for a reset session");
                GenerationOutcome::Discarded
            }
        }
        Err(err) => {
            if session.fail_generation(ticket) {
                tracing::warn!(%session_id, error = %err, status = ?err.status(), "Strategy generation failed");
                GenerationOutcome::Failed(err)
            } else {
                tracing::debug!(%session_id, error = %err, "Discarded failure for a reset session");
                GenerationOutcome::Discarded
            }
        }
    };

    GenerateStrategyResult {
        view: SessionView::from(&*session),
        outcome,
    }
}
