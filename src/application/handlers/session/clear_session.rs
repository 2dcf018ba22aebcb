//! ClearSessionHandler - Discards the session and starts a fresh one.

use std::sync::Arc;
use tracing::{info, warn};

use crate::application::{SessionRuntime, SessionSnapshot};
use crate::domain::foundation::DomainError;
use crate::domain::session::SessionStatus;

use super::InitializeSessionHandler;

/// Handler for clearing the session.
///
/// Removes persisted answers and the identifier, then initializes again
/// under a new identifier. State is only cleared once the persisted data is
/// gone, so a storage failure leaves the session as it was.
///
/// A session left uninitialized by an earlier failure is initialized again.
pub struct ClearSessionHandler {
    runtime: Arc<SessionRuntime>,
}

impl ClearSessionHandler {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self { runtime }
    }

    pub async fn handle(&self) -> Result<SessionSnapshot, DomainError> {
        {
            let mut state = self.runtime.state().write().await;
            match state.status() {
                SessionStatus::Uninitialized | SessionStatus::Cleared => {
                    warn!(
                        status = %state.status(),
                        "No active session to clear, initializing again"
                    );
                }
                _ => {
                    if let Some(session_id) = state.session_id().copied() {
                        self.runtime.persistence().forget(&session_id).await?;
                    }
                    if let Some(session_id) = state.clear()? {
                        info!(%session_id, "Session cleared");
                    }
                }
            }
        }

        InitializeSessionHandler::new(self.runtime.clone())
            .handle()
            .await
    }
}
