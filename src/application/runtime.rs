//! Shared session runtime.
//!
//! One `SessionRuntime` exists per process. Handlers hold it behind an `Arc`
//! and go through its `RwLock` for every read or mutation of `AppState`.
//! The lock may be held across storage calls but never across a remote
//! generator call.

use serde::Serialize;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

use crate::domain::dilemma::{Corpus, PresentedDilemma};
use crate::domain::foundation::SessionId;
use crate::domain::session::{AppState, SessionStatus};
use crate::ports::{DilemmaGenerator, ReflectionGenerator};

use super::SessionPersistence;

/// Optional session behaviors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionSettings {
    /// Ask the remote generator for the first dilemma after initialization.
    pub initial_remote_dilemma: bool,
    /// Replace the answered dilemma with a generated follow-up.
    pub auto_advance: bool,
    /// Pause before showing the follow-up.
    pub auto_advance_delay: Duration,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            initial_remote_dilemma: false,
            auto_advance: false,
            auto_advance_delay: Duration::from_millis(2000),
        }
    }
}

/// Read model of the session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SessionSnapshot {
    pub session_id: Option<SessionId>,
    pub status: SessionStatus,
    pub current: Option<PresentedDilemma>,
    pub answered_count: usize,
    pub corpus_position: usize,
    pub corpus_size: usize,
}

/// State and collaborators shared by the session handlers.
pub struct SessionRuntime {
    state: RwLock<AppState>,
    persistence: SessionPersistence,
    corpus: Arc<Corpus>,
    dilemmas: Arc<dyn DilemmaGenerator>,
    reflections: Arc<dyn ReflectionGenerator>,
    settings: SessionSettings,
}

impl SessionRuntime {
    pub fn new(
        persistence: SessionPersistence,
        corpus: Arc<Corpus>,
        dilemmas: Arc<dyn DilemmaGenerator>,
        reflections: Arc<dyn ReflectionGenerator>,
        settings: SessionSettings,
    ) -> Self {
        Self {
            state: RwLock::new(AppState::new()),
            persistence,
            corpus,
            dilemmas,
            reflections,
            settings,
        }
    }

    pub fn state(&self) -> &RwLock<AppState> {
        &self.state
    }

    pub fn persistence(&self) -> &SessionPersistence {
        &self.persistence
    }

    pub fn corpus(&self) -> &Corpus {
        &self.corpus
    }

    pub fn dilemmas(&self) -> &dyn DilemmaGenerator {
        self.dilemmas.as_ref()
    }

    pub fn reflections(&self) -> &dyn ReflectionGenerator {
        self.reflections.as_ref()
    }

    pub fn settings(&self) -> &SessionSettings {
        &self.settings
    }

    /// Builds a read model from the current state.
    pub async fn snapshot(&self) -> SessionSnapshot {
        let state = self.state.read().await;
        self.snapshot_of(&state)
    }

    pub(crate) fn snapshot_of(&self, state: &AppState) -> SessionSnapshot {
        SessionSnapshot {
            session_id: state.session_id().copied(),
            status: state.status(),
            current: state.current().cloned(),
            answered_count: state.answers().len(),
            corpus_position: state.cursor(),
            corpus_size: self.corpus.len(),
        }
    }
}
