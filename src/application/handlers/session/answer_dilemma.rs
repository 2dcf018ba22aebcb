//! AnswerDilemmaHandler - Records a response with its reflection.

use std::sync::Arc;
use tokio::time::sleep;
use tracing::{debug, error, info, warn};

use crate::application::SessionRuntime;
use crate::domain::dilemma::{EthicalTopic, Intensity};
use crate::domain::foundation::{DilemmaId, DomainError, ErrorCode, ResponseValue};
use crate::domain::session::{AnsweredDilemma, Notification, ReflectionOutcome};
use crate::ports::{DilemmaRequest, ReflectionRequest};

/// Command to answer the dilemma currently shown.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnswerDilemmaCommand {
    /// Position on the 0.0-1.0 scale.
    pub response: f64,
}

/// Result of a recorded answer.
#[derive(Debug, Clone, PartialEq)]
pub struct AnswerDilemmaResult {
    pub answer: AnsweredDilemma,
    /// True if the fallback narrative was stored.
    pub reflection_failed: bool,
}

/// Handler for answering dilemmas.
pub struct AnswerDilemmaHandler {
    runtime: Arc<SessionRuntime>,
}

impl AnswerDilemmaHandler {
    pub fn new(runtime: Arc<SessionRuntime>) -> Self {
        Self { runtime }
    }

    pub async fn handle(&self, cmd: AnswerDilemmaCommand) -> Result<AnswerDilemmaResult, DomainError> {
        let response = ResponseValue::try_new(cmd.response)?;

        // 1. Lock the current dilemma
        let ticket = self.runtime.state().write().await.begin_reflection(response)?;
        let epoch = ticket.epoch;

        // 2. Ask for the reflection without holding the lock
        let request = ReflectionRequest {
            dilemma_text: ticket.dilemma.text().to_string(),
            response,
            topic: ticket.dilemma.topic(),
        };
        let outcome = match self.runtime.reflections().reflect(request).await {
            Ok(narrative) => ReflectionOutcome::Narrative(narrative),
            Err(e) => {
                warn!(error = %e, dilemma_id = %ticket.dilemma.id(), "Reflection failed, storing fallback narrative");
                ReflectionOutcome::Failed {
                    reason: e.to_string(),
                }
            }
        };
        let reflection_failed = matches!(outcome, ReflectionOutcome::Failed { .. });

        // 3. Record and persist
        let answer = {
            let mut state = self.runtime.state().write().await;
            let Some(answer) = state.complete_reflection(ticket, outcome) else {
                debug!(epoch, "Discarding reflection for a replaced session");
                return Err(DomainError::new(
                    ErrorCode::SessionNotFound,
                    "Session was cleared while the reflection was generated",
                ));
            };

            if let Some(session_id) = state.session_id().copied() {
                if let Err(e) = self
                    .runtime
                    .persistence()
                    .save_answers(&session_id, state.answers())
                    .await
                {
                    error!(%session_id, error = %e, "Failed to persist answers");
                }
            }
            answer
        };

        info!(
            dilemma_id = %answer.dilemma.id(),
            response = %answer.response,
            reflection_failed,
            "Answer recorded"
        );

        // 4. Optional follow-up
        if !reflection_failed && self.runtime.settings().auto_advance {
            let runtime = self.runtime.clone();
            let answered = answer.dilemma.id().clone();
            tokio::spawn(async move { advance_after_answer(runtime, epoch, answered).await });
        }

        Ok(AnswerDilemmaResult {
            answer,
            reflection_failed,
        })
    }
}

/// Replaces the answered dilemma with a generated follow-up.
///
/// Generation runs first, then the configured delay. The result is shown
/// only if the session is unchanged and still shows `answered`; a failed
/// generation advances the corpus under the same condition.
pub(super) async fn advance_after_answer(
    runtime: Arc<SessionRuntime>,
    epoch: u64,
    answered: DilemmaId,
) {
    let (topic, intensity) = {
        let mut rng = rand::thread_rng();
        (EthicalTopic::random(&mut rng), Intensity::random(&mut rng))
    };
    let context = runtime.state().read().await.generation_ticket().context;
    let request = DilemmaRequest::new(topic, intensity).with_context(context);

    let generated = runtime.dilemmas().generate(request).await;
    sleep(runtime.settings().auto_advance_delay).await;

    let mut state = runtime.state().write().await;
    match generated {
        Ok(dilemma) => {
            if state.replace_current_if(epoch, &answered, dilemma) {
                state.notify(Notification::follow_up_ready(topic.name()));
            } else {
                debug!(epoch, "Discarding follow-up dilemma, user moved on");
            }
        }
        Err(e) => {
            warn!(error = %e, "Follow-up generation failed, advancing corpus");
            if state
                .advance_corpus_if(epoch, &answered, runtime.corpus())
                .is_none()
            {
                debug!(epoch, "Skipping corpus advance, user moved on");
            }
        }
    }
}
