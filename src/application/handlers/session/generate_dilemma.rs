//! GenerateDilemmaHandler - Asks the remote generator for a new dilemma.

use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::application::SessionRuntime;
use crate::domain::dilemma::{EthicalTopic, Intensity, PresentedDilemma};
use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::DilemmaRequest;

/// Command to generate a dilemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerateDilemmaCommand {
    pub topic: EthicalTopic,
    pub intensity: Intensity,
}

/// Result of a generation request.
#[derive(Debug, Clone, PartialEq)]
pub struct GenerateDilemmaResult {
    /// The dilemma now shown; `None` only if the fallback corpus is empty.
    pub current: Option<PresentedDilemma>,
    /// True if generation failed and the corpus was used instead.
    pub fell_back: bool,
}

/// Handler for remote dilemma generation with corpus fallback.
pub struct GenerateDilemmaHandler {
    runtime: Arc<SessionRuntime>,
}

impl GenerateDilemmaHandler {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self { runtime }
    }

    pub async fn handle(
        &self,
        cmd: GenerateDilemmaCommand,
    ) -> Result<GenerateDilemmaResult, DomainError> {
        let ticket = self.runtime.state().read().await.begin_generation()?;
        let request =
            DilemmaRequest::new(cmd.topic, cmd.intensity).with_context(ticket.context.clone());

        let generated = self.runtime.dilemmas().generate(request).await;

        let mut state = self.runtime.state().write().await;
        match generated {
            Ok(dilemma) => {
                let dilemma_id = dilemma.id().clone();
                if !state.apply_generated(&ticket, dilemma) {
                    debug!(epoch = ticket.epoch, "Discarding generated dilemma for a changed session");
                    return Err(stale_session());
                }
                info!(
                    %dilemma_id,
                    source = self.runtime.dilemmas().source_name(),
                    topic = %cmd.topic,
                    intensity = %cmd.intensity,
                    "Dilemma generated"
                );
                Ok(GenerateDilemmaResult {
                    current: state.current().cloned(),
                    fell_back: false,
                })
            }
            Err(e) => {
                warn!(error = %e, topic = %cmd.topic, "Dilemma generation failed, falling back to corpus");
                if ticket.epoch != state.epoch() || !state.status().is_ready() {
                    return Err(stale_session());
                }
                let current =
                    state.apply_generation_failure(&ticket, &e.to_string(), self.runtime.corpus());
                Ok(GenerateDilemmaResult {
                    current,
                    fell_back: true,
                })
            }
        }
    }
}

fn stale_session() -> DomainError {
    DomainError::new(
        ErrorCode::InvalidStateTransition,
        "Session changed while the dilemma was generated",
    )
}

#[cfg(test)]
mod tests {
    use super::super::initialize_session::initialize;
    use super::super::test_support::{harness, harness_with};
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::application::SessionSettings;
    use crate::domain::dilemma::{Corpus, DilemmaOrigin};
    use crate::domain::foundation::ResponseValue;
    use crate::domain::session::{ReflectionOutcome, NO_ANSWERS_CONTEXT};
    use std::time::Duration;

    fn command() -> GenerateDilemmaCommand {
        GenerateDilemmaCommand {
            topic: EthicalTopic::OntologyOfIgnorance,
            intensity: Intensity::Extreme,
        }
    }

    #[tokio::test]
    async fn shows_generated_dilemma_with_synthetic_id() {
        let h = harness(SessionSettings::default());
        initialize(&h.runtime).await.unwrap();

        let result = GenerateDilemmaHandler::new(h.runtime.clone())
            .handle(command())
            .await
            .unwrap();

        assert!(!result.fell_back);
        let current = result.current.unwrap();
        assert!(current.dilemma.id().is_synthetic());
        assert_eq!(current.dilemma.topic(), EthicalTopic::OntologyOfIgnorance);
        assert_eq!(current.narrative, None);
        let prompt = &h.dilemma_ai.get_calls()[0].messages[0].content;
        assert!(prompt.contains(NO_ANSWERS_CONTEXT));
    }

    #[tokio::test]
    async fn sends_digest_of_latest_answer() {
        let h = harness(SessionSettings::default());
        initialize(&h.runtime).await.unwrap();
        {
            let mut state = h.runtime.state().write().await;
            let ticket = state
                .begin_reflection(ResponseValue::try_new(0.75).unwrap())
                .unwrap();
            state.complete_reflection(ticket, ReflectionOutcome::Narrative("n".to_string()));
        }

        GenerateDilemmaHandler::new(h.runtime.clone())
            .handle(command())
            .await
            .unwrap();

        let prompt = &h.dilemma_ai.get_calls()[0].messages[0].content;
        assert!(prompt.contains("El usuario ha respondido a 1 dilemas."));
        assert!(prompt.contains("'Temporalidad Moral' fue 0.75"));
    }

    #[tokio::test]
    async fn failure_falls_back_to_corpus_with_notification() {
        let h = harness_with(
            Corpus::bundled().unwrap(),
            MockAIProvider::new().with_error(MockError::Unavailable {
                message: "503".to_string(),
            }),
            MockAIProvider::new(),
            SessionSettings::default(),
        );
        initialize(&h.runtime).await.unwrap();

        let result = GenerateDilemmaHandler::new(h.runtime.clone())
            .handle(command())
            .await
            .unwrap();

        assert!(result.fell_back);
        let current = result.current.unwrap();
        assert!(matches!(current.dilemma.origin(), DilemmaOrigin::Corpus { .. }));
        let notifications = h.runtime.state().write().await.drain_notifications();
        assert_eq!(notifications[0].title, "Error de RAG");
    }

    #[tokio::test]
    async fn result_for_cleared_session_is_discarded() {
        let h = harness_with(
            Corpus::bundled().unwrap(),
            MockAIProvider::new().with_delay(Duration::from_millis(50)),
            MockAIProvider::new(),
            SessionSettings::default(),
        );
        initialize(&h.runtime).await.unwrap();

        let handler = GenerateDilemmaHandler::new(h.runtime.clone());
        let pending = tokio::spawn(async move { handler.handle(command()).await });
        tokio::time::sleep(Duration::from_millis(10)).await;
        h.runtime.state().write().await.clear().unwrap();
        initialize(&h.runtime).await.unwrap();

        let err = pending.await.unwrap().unwrap_err();

        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
        let state = h.runtime.state().read().await;
        assert_eq!(state.current().unwrap().dilemma.id().as_str(), "TM_S_01");
    }

    #[tokio::test]
    async fn rejected_before_initialization() {
        let h = harness(SessionSettings::default());

        let err = GenerateDilemmaHandler::new(h.runtime.clone())
            .handle(command())
            .await
            .unwrap_err();

        assert_eq!(err.code, ErrorCode::SessionNotFound);
        assert_eq!(h.dilemma_ai.call_count(), 0);
    }
}
