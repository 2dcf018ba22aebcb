//! AdvanceDilemmaHandler - Shows the next corpus dilemma.

use std::sync::Arc;
use tracing::debug;

use crate::application::SessionRuntime;
use crate::domain::dilemma::PresentedDilemma;
use crate::domain::foundation::DomainError;

/// Handler for sequential corpus navigation.
pub struct AdvanceDilemmaHandler {
    runtime: Arc<SessionRuntime>,
}

impl AdvanceDilemmaHandler {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self { runtime }
    }

    /// Returns the dilemma now shown, or `None` if the corpus is empty.
    pub async fn handle(&self) -> Result<Option<PresentedDilemma>, DomainError> {
        let mut state = self.runtime.state().write().await;
        let presented = state.advance_corpus(self.runtime.corpus())?;
        debug!(cursor = state.cursor(), "Advanced corpus");
        Ok(presented)
    }
}

#[cfg(test)]
mod tests {
    use super::super::initialize_session::initialize;
    use super::super::test_support::{harness, harness_with};
    use super::*;
    use crate::adapters::ai::MockAIProvider;
    use crate::application::SessionSettings;
    use crate::domain::dilemma::Corpus;
    use crate::domain::foundation::{ErrorCode, ResponseValue};
    use crate::domain::session::ReflectionOutcome;

    #[tokio::test]
    async fn cycles_back_to_first_entry() {
        let h = harness(SessionSettings::default());
        initialize(&h.runtime).await.unwrap();
        let handler = AdvanceDilemmaHandler::new(h.runtime.clone());
        let size = h.runtime.corpus().len();

        let mut last = None;
        for _ in 0..size {
            last = handler.handle().await.unwrap();
        }

        assert_eq!(last.unwrap().dilemma.id().as_str(), "TM_S_01");
    }

    #[tokio::test]
    async fn answered_entry_comes_back_with_its_narrative() {
        let h = harness(SessionSettings::default());
        initialize(&h.runtime).await.unwrap();
        {
            let mut state = h.runtime.state().write().await;
            let ticket = state
                .begin_reflection(ResponseValue::try_new(0.9).unwrap())
                .unwrap();
            state.complete_reflection(ticket, ReflectionOutcome::Narrative("Guardada".to_string()));
        }
        let handler = AdvanceDilemmaHandler::new(h.runtime.clone());

        let mut presented = None;
        for _ in 0..h.runtime.corpus().len() {
            presented = handler.handle().await.unwrap();
        }

        assert_eq!(presented.unwrap().narrative.as_deref(), Some("Guardada"));
    }

    #[tokio::test]
    async fn empty_corpus_returns_none_with_notification() {
        let h = harness_with(
            Corpus::default(),
            MockAIProvider::new(),
            MockAIProvider::new(),
            SessionSettings::default(),
        );
        initialize(&h.runtime).await.unwrap();
        h.runtime.state().write().await.drain_notifications();

        let presented = AdvanceDilemmaHandler::new(h.runtime.clone())
            .handle()
            .await
            .unwrap();

        assert!(presented.is_none());
        let notifications = h.runtime.state().write().await.drain_notifications();
        assert_eq!(notifications.len(), 1);
    }

    #[tokio::test]
    async fn rejected_while_reflection_is_pending() {
        let h = harness(SessionSettings::default());
        initialize(&h.runtime).await.unwrap();
        h.runtime
            .state()
            .write()
            .await
            .begin_reflection(ResponseValue::MIDPOINT)
            .unwrap();

        let err = AdvanceDilemmaHandler::new(h.runtime.clone())
            .handle()
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::ReflectionInProgress);
    }
}
