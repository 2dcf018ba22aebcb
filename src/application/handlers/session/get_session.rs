//! Session query handlers.

use std::sync::Arc;

use crate::application::{SessionRuntime, SessionSnapshot};
use crate::domain::session::{AnsweredDilemma, Notification};

/// Handler returning the session read model.
pub struct GetSessionHandler {
    runtime: Arc<SessionRuntime>,
}

impl GetSessionHandler {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self { runtime }
    }

    pub async fn handle(&self) -> SessionSnapshot {
        self.runtime.snapshot().await
    }
}

/// Handler returning the answered list, oldest first.
pub struct ListAnswersHandler {
    runtime: Arc<SessionRuntime>,
}

impl ListAnswersHandler {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self { runtime }
    }

    pub async fn handle(&self) -> Vec<AnsweredDilemma> {
        self.runtime.state().read().await.answers().to_vec()
    }
}

/// Handler that takes all pending notifications.
pub struct DrainNotificationsHandler {
    runtime: Arc<SessionRuntime>,
}

impl DrainNotificationsHandler {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self { runtime }
    }

    pub async fn handle(&self) -> Vec<Notification> {
        self.runtime.state().write().await.drain_notifications()
    }
}
