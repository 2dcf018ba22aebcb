//! InitializeSessionHandler - Restores or creates the session.

use std::sync::Arc;
use tracing::{debug, info};

use crate::application::{SessionRuntime, SessionSnapshot};
use crate::domain::dilemma::{EthicalTopic, Intensity};
use crate::domain::foundation::DomainError;
use crate::domain::session::{SessionStatus, INITIAL_DILEMMA_CONTEXT};
use crate::ports::DilemmaRequest;

/// Handler for session initialization.
///
/// Initializing a session that is already initialized returns its snapshot
/// unchanged.
pub struct InitializeSessionHandler {
    runtime: Arc<SessionRuntime>,
}

impl InitializeSessionHandler {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self { runtime }
    }

    pub async fn handle(&self) -> Result<SessionSnapshot, DomainError> {
        let Some(epoch) = initialize(&self.runtime).await? else {
            return Ok(self.runtime.snapshot().await);
        };

        if self.runtime.settings().initial_remote_dilemma {
            let runtime = self.runtime.clone();
            tokio::spawn(async move { load_initial_remote_dilemma(runtime, epoch).await });
        }

        Ok(self.runtime.snapshot().await)
    }
}

/// Loads the persisted session into state.
///
/// Returns the new epoch, or `None` if the session was already initialized.
pub(super) async fn initialize(runtime: &SessionRuntime) -> Result<Option<u64>, DomainError> {
    let mut state = runtime.state().write().await;
    if matches!(
        state.status(),
        SessionStatus::Ready | SessionStatus::AwaitingReflection
    ) {
        return Ok(None);
    }

    let epoch = state.begin_initialize()?;
    let persistence = runtime.persistence();
    let restored = async {
        let id = persistence.load_or_create_id().await?;
        let answers = persistence.load_answers(&id).await?;
        Ok::<_, DomainError>((id, answers))
    }
    .await;

    let (session_id, answers) = match restored {
        Ok(restored) => restored,
        Err(e) => {
            state.abort_initialize();
            return Err(e);
        }
    };

    let restored_count = answers.len();
    state.finish_initialize(session_id, answers, runtime.corpus())?;
    info!(%session_id, epoch, restored_count, "Session initialized");
    Ok(Some(epoch))
}

/// Replaces the first corpus dilemma with a remote one.
///
/// Skipped if the first entry is already answered. The result is dropped if
/// the session was replaced or the user moved on while it was generated.
pub(super) async fn load_initial_remote_dilemma(runtime: Arc<SessionRuntime>, epoch: u64) {
    let expected = {
        let state = runtime.state().read().await;
        match runtime.corpus().first() {
            Some(first) if !state.has_answered(first.id()) => first.id().clone(),
            _ => return,
        }
    };

    let request = DilemmaRequest::new(EthicalTopic::MoralTemporality, Intensity::Mild)
        .with_context(INITIAL_DILEMMA_CONTEXT);

    match runtime.dilemmas().generate(request).await {
        Ok(dilemma) => {
            let mut state = runtime.state().write().await;
            if state.replace_current_if(epoch, &expected, dilemma) {
                info!(source = runtime.dilemmas().source_name(), "Initial remote dilemma shown");
            } else {
                debug!(epoch, "Discarding initial remote dilemma for a stale session");
            }
        }
        Err(e) => {
            debug!(error = %e, "Initial remote dilemma unavailable, keeping corpus dilemma");
        }
    }
}
