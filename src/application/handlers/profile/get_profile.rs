//! GetProfileHandler - Query handler for the ethical profile.

use std::sync::Arc;

use crate::application::SessionRuntime;
use crate::domain::profile::EthicalProfile;

/// Handler returning the profile of the current answers.
///
/// The profile is cached in session state until the answers change.
pub struct GetProfileHandler {
    runtime: Arc<SessionRuntime>,
}

impl GetProfileHandler {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self { runtime }
    }

    pub async fn handle(&self) -> EthicalProfile {
        self.runtime.state().write().await.profile()
    }
}
