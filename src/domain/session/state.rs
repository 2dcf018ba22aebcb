//! Session state and its transitions.
//!
//! `AppState` is the single owner of everything a session knows: the
//! identifier, the answered list, the dilemma on screen, the corpus cursor,
//! the cached profile and pending notifications. Every mutation goes through
//! a method here; callers never edit fields directly.
//!
//! # Epochs
//!
//! Initialization and clearing bump `epoch`. Work that awaits a remote call
//! snapshots the epoch first and hands it back when applying its result. A
//! mismatch means the session was replaced in the meantime, and the result
//! is dropped.

use crate::domain::dilemma::{Corpus, Dilemma, PresentedDilemma};
use crate::domain::foundation::{
    DilemmaId, DomainError, ErrorCode, ResponseValue, SessionId, StateMachine,
};
use crate::domain::profile::{generate_profile, EthicalProfile};

use super::answered::{FALLBACK_ANSWER_NARRATIVE, FALLBACK_CURRENT_NARRATIVE};
use super::context::answer_digest;
use super::notification::{Notification, NotificationQueue};
use super::{AnsweredDilemma, SessionStatus};

/// Snapshot taken when a reflection request starts.
#[derive(Debug, Clone, PartialEq)]
pub struct ReflectionTicket {
    pub epoch: u64,
    pub dilemma: Dilemma,
    pub response: ResponseValue,
}

/// Snapshot taken before asking a remote generator for a dilemma.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerationTicket {
    pub epoch: u64,
    /// Answer digest sent as user context.
    pub context: String,
}

/// Result of a reflection request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReflectionOutcome {
    Narrative(String),
    Failed { reason: String },
}

/// The whole mutable state of one session.
#[derive(Debug, Clone, Default)]
pub struct AppState {
    status: SessionStatus,
    session_id: Option<SessionId>,
    epoch: u64,
    answers: Vec<AnsweredDilemma>,
    current: Option<PresentedDilemma>,
    cursor: usize,
    profile: Option<EthicalProfile>,
    notifications: NotificationQueue,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Accessors
    // ─────────────────────────────────────────────────────────────────────────

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn session_id(&self) -> Option<&SessionId> {
        self.session_id.as_ref()
    }

    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    pub fn answers(&self) -> &[AnsweredDilemma] {
        &self.answers
    }

    pub fn current(&self) -> Option<&PresentedDilemma> {
        self.current.as_ref()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns true if the dilemma with `id` has been answered.
    pub fn has_answered(&self, id: &DilemmaId) -> bool {
        self.find_answer(id).is_some()
    }

    /// First answer recorded for `id`.
    fn find_answer(&self, id: &DilemmaId) -> Option<&AnsweredDilemma> {
        self.answers.iter().find(|a| a.dilemma.id() == id)
    }

    /// Presents `dilemma` with the narrative of its first answer, if any.
    fn present(&self, dilemma: &Dilemma) -> PresentedDilemma {
        let narrative = self
            .find_answer(dilemma.id())
            .and_then(|a| a.narrative.clone());
        PresentedDilemma::with_narrative(dilemma.clone(), narrative)
    }

    fn current_id(&self) -> Option<&DilemmaId> {
        self.current.as_ref().map(|p| p.dilemma.id())
    }

    /// Fails unless the session accepts answers and navigation.
    pub fn ensure_ready(&self) -> Result<(), DomainError> {
        match self.status {
            SessionStatus::Ready => Ok(()),
            SessionStatus::AwaitingReflection => Err(DomainError::new(
                ErrorCode::ReflectionInProgress,
                "A reflection is already being generated",
            )),
            status => Err(DomainError::new(
                ErrorCode::SessionNotFound,
                "Session is not initialized",
            )
            .with_detail("status", status.to_string())),
        }
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Lifecycle
    // ─────────────────────────────────────────────────────────────────────────

    /// Enters `Initializing` and starts a new epoch.
    pub fn begin_initialize(&mut self) -> Result<u64, DomainError> {
        self.status = self.status.transition_to(SessionStatus::Initializing)?;
        self.epoch += 1;
        Ok(self.epoch)
    }

    /// Returns to `Uninitialized` after a failed load.
    pub fn abort_initialize(&mut self) {
        if self.status == SessionStatus::Initializing {
            self.status = SessionStatus::Uninitialized;
        }
    }

    /// Installs the restored session and shows the first corpus entry.
    ///
    /// An empty corpus leaves no current dilemma and queues a notification.
    pub fn finish_initialize(
        &mut self,
        session_id: SessionId,
        answers: Vec<AnsweredDilemma>,
        corpus: &Corpus,
    ) -> Result<(), DomainError> {
        self.status = self.status.transition_to(SessionStatus::Ready)?;
        self.session_id = Some(session_id);
        self.answers = answers;
        self.cursor = 0;
        self.profile = None;
        self.current = match corpus.first() {
            Some(first) => Some(self.present(first)),
            None => {
                self.notifications.push(Notification::corpus_unavailable());
                None
            }
        };
        Ok(())
    }

    /// Drops all session data and starts a new epoch.
    ///
    /// Returns the discarded identifier so its persisted data can be removed.
    pub fn clear(&mut self) -> Result<Option<SessionId>, DomainError> {
        self.status = self.status.transition_to(SessionStatus::Cleared)?;
        self.epoch += 1;
        self.answers.clear();
        self.current = None;
        self.cursor = 0;
        self.profile = None;
        Ok(self.session_id.take())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Answering
    // ─────────────────────────────────────────────────────────────────────────

    /// Locks the current dilemma for reflection.
    ///
    /// # Errors
    ///
    /// - `SessionNotFound` if the session is not initialized
    /// - `ReflectionInProgress` if another reflection is pending
    /// - `DilemmaNotFound` if no dilemma is shown
    pub fn begin_reflection(
        &mut self,
        response: ResponseValue,
    ) -> Result<ReflectionTicket, DomainError> {
        self.ensure_ready()?;
        let dilemma = self
            .current
            .as_ref()
            .map(|p| p.dilemma.clone())
            .ok_or_else(|| DomainError::new(ErrorCode::DilemmaNotFound, "No dilemma is shown"))?;
        self.status = self.status.transition_to(SessionStatus::AwaitingReflection)?;
        Ok(ReflectionTicket {
            epoch: self.epoch,
            dilemma,
            response,
        })
    }

    /// Appends the answer for `ticket` and shows the narrative.
    ///
    /// A failed outcome stores the fallback narrative and queues an error
    /// notification. Returns `None` without touching state if the ticket
    /// belongs to an earlier epoch.
    pub fn complete_reflection(
        &mut self,
        ticket: ReflectionTicket,
        outcome: ReflectionOutcome,
    ) -> Option<AnsweredDilemma> {
        if ticket.epoch != self.epoch || self.status != SessionStatus::AwaitingReflection {
            return None;
        }

        let (stored, shown) = match outcome {
            ReflectionOutcome::Narrative(text) => (text.clone(), text),
            ReflectionOutcome::Failed { reason } => {
                self.notifications.push(Notification::reflection_failed(&reason));
                (
                    FALLBACK_ANSWER_NARRATIVE.to_string(),
                    FALLBACK_CURRENT_NARRATIVE.to_string(),
                )
            }
        };

        let answer = AnsweredDilemma::new(ticket.dilemma, ticket.response, Some(stored));
        self.answers.push(answer.clone());
        self.profile = None;
        if let Some(current) = self.current.as_mut() {
            if current.dilemma.id() == answer.dilemma.id() {
                current.narrative = Some(shown);
            }
        }
        self.status = SessionStatus::Ready;
        Some(answer)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────────

    /// Moves the cursor to the next corpus entry and shows it.
    ///
    /// Returns `Ok(None)` and queues a notification if the corpus is empty.
    pub fn advance_corpus(
        &mut self,
        corpus: &Corpus,
    ) -> Result<Option<PresentedDilemma>, DomainError> {
        self.ensure_ready()?;
        Ok(self.step_corpus(corpus))
    }

    fn step_corpus(&mut self, corpus: &Corpus) -> Option<PresentedDilemma> {
        let next = match corpus.next_index(self.cursor) {
            Some(next) => next,
            None => {
                self.notifications.push(Notification::corpus_exhausted());
                return None;
            }
        };
        let dilemma = corpus.get(next)?;
        let presented = self.present(dilemma);
        self.cursor = next;
        self.current = Some(presented.clone());
        Some(presented)
    }

    /// Snapshot for a remote generation request.
    pub fn begin_generation(&self) -> Result<GenerationTicket, DomainError> {
        self.ensure_ready()?;
        Ok(self.generation_ticket())
    }

    /// Snapshot for a generation that does not require a ready session.
    pub fn generation_ticket(&self) -> GenerationTicket {
        GenerationTicket {
            epoch: self.epoch,
            context: answer_digest(&self.answers),
        }
    }

    /// Shows a freshly generated dilemma.
    ///
    /// Returns false, leaving state untouched, if the ticket is stale or a
    /// reflection started in the meantime.
    pub fn apply_generated(&mut self, ticket: &GenerationTicket, dilemma: Dilemma) -> bool {
        if ticket.epoch != self.epoch || !self.status.is_ready() {
            return false;
        }
        self.current = Some(PresentedDilemma::fresh(dilemma));
        self.notifications.push(Notification::dilemma_generated());
        true
    }

    /// Falls back to the corpus after a failed generation.
    pub fn apply_generation_failure(
        &mut self,
        ticket: &GenerationTicket,
        reason: &str,
        corpus: &Corpus,
    ) -> Option<PresentedDilemma> {
        if ticket.epoch != self.epoch || !self.status.is_ready() {
            return None;
        }
        self.notifications.push(Notification::generation_failed(reason));
        self.step_corpus(corpus)
    }

    /// Replaces the current dilemma if it is still `expected`.
    ///
    /// Used by follow-up tasks that must not overwrite a dilemma the user
    /// has navigated to since the task started.
    pub fn replace_current_if(
        &mut self,
        epoch: u64,
        expected: &DilemmaId,
        dilemma: Dilemma,
    ) -> bool {
        if !self.still_showing(epoch, expected) {
            return false;
        }
        self.current = Some(PresentedDilemma::fresh(dilemma));
        true
    }

    /// Advances the corpus if the current dilemma is still `expected`.
    pub fn advance_corpus_if(
        &mut self,
        epoch: u64,
        expected: &DilemmaId,
        corpus: &Corpus,
    ) -> Option<PresentedDilemma> {
        if !self.still_showing(epoch, expected) {
            return None;
        }
        self.step_corpus(corpus)
    }

    fn still_showing(&self, epoch: u64, expected: &DilemmaId) -> bool {
        epoch == self.epoch && self.status.is_ready() && self.current_id() == Some(expected)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Derived views
    // ─────────────────────────────────────────────────────────────────────────

    /// Returns the profile, recomputing it if answers changed.
    pub fn profile(&mut self) -> EthicalProfile {
        if let Some(profile) = &self.profile {
            return profile.clone();
        }
        let profile = generate_profile(&self.answers);
        self.profile = Some(profile.clone());
        profile
    }

    pub fn has_cached_profile(&self) -> bool {
        self.profile.is_some()
    }

    pub fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }

    pub fn drain_notifications(&mut self) -> Vec<Notification> {
        self.notifications.drain()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::dilemma::{DilemmaOrigin, EthicalTopic, Intensity};
    use crate::domain::profile::EMPTY_PROFILE_SUMMARY;

    fn corpus_entry(id: &str, topic: EthicalTopic) -> Dilemma {
        Dilemma::new(
            DilemmaId::new(id).unwrap(),
            format!("Texto {}", id),
            topic,
            Intensity::Mild,
            DilemmaOrigin::Corpus {
                hidden_variable: "oculta".to_string(),
            },
        )
        .unwrap()
    }

    fn corpus() -> Corpus {
        Corpus::new(vec![
            corpus_entry("A", EthicalTopic::MoralTemporality),
            corpus_entry("B", EthicalTopic::RadicalAlterity),
            corpus_entry("C", EthicalTopic::EverydayMicroethics),
        ])
    }

    fn generated(text: &str) -> Dilemma {
        Dilemma::new(
            DilemmaId::synthetic("rag"),
            text,
            EthicalTopic::OntologyOfIgnorance,
            Intensity::Extreme,
            DilemmaOrigin::Generated,
        )
        .unwrap()
    }

    fn ready_state() -> AppState {
        let mut state = AppState::new();
        state.begin_initialize().unwrap();
        state
            .finish_initialize(SessionId::new(), Vec::new(), &corpus())
            .unwrap();
        state
    }

    fn response(v: f64) -> ResponseValue {
        ResponseValue::try_new(v).unwrap()
    }

    fn current_id(state: &AppState) -> &str {
        state.current().unwrap().dilemma.id().as_str()
    }

    #[test]
    fn new_state_is_uninitialized_and_not_ready() {
        let state = AppState::new();
        assert_eq!(state.status(), SessionStatus::Uninitialized);
        assert_eq!(state.ensure_ready().unwrap_err().code, ErrorCode::SessionNotFound);
    }

    #[test]
    fn initialize_shows_first_corpus_entry() {
        let state = ready_state();
        assert_eq!(state.status(), SessionStatus::Ready);
        assert_eq!(state.epoch(), 1);
        assert_eq!(state.cursor(), 0);
        assert_eq!(current_id(&state), "A");
        assert!(state.current().unwrap().narrative.is_none());
    }

    #[test]
    fn initialize_restores_narrative_of_answered_first_entry() {
        let answers = vec![
            AnsweredDilemma::new(
                corpus_entry("A", EthicalTopic::MoralTemporality),
                response(0.3),
                Some("primera".to_string()),
            ),
            AnsweredDilemma::new(
                corpus_entry("A", EthicalTopic::MoralTemporality),
                response(0.9),
                Some("segunda".to_string()),
            ),
        ];
        let mut state = AppState::new();
        state.begin_initialize().unwrap();
        state.finish_initialize(SessionId::new(), answers, &corpus()).unwrap();

        assert_eq!(state.current().unwrap().narrative.as_deref(), Some("primera"));
    }

    #[test]
    fn initialize_with_empty_corpus_has_no_current_and_notifies() {
        let mut state = AppState::new();
        state.begin_initialize().unwrap();
        state
            .finish_initialize(SessionId::new(), Vec::new(), &Corpus::default())
            .unwrap();

        assert!(state.current().is_none());
        let notes = state.drain_notifications();
        assert_eq!(notes.len(), 1);
        assert_eq!(notes[0].title, "Sin dilemas");
    }

    #[test]
    fn initialize_twice_without_clear_is_rejected() {
        let mut state = ready_state();
        let err = state.begin_initialize().unwrap_err();
        assert_eq!(err.code, ErrorCode::InvalidStateTransition);
    }

    #[test]
    fn abort_initialize_returns_to_uninitialized() {
        let mut state = AppState::new();
        state.begin_initialize().unwrap();
        state.abort_initialize();
        assert_eq!(state.status(), SessionStatus::Uninitialized);
        assert!(state.begin_initialize().is_ok());
    }

    #[test]
    fn successful_reflection_records_answer_and_shows_narrative() {
        let mut state = ready_state();
        let ticket = state.begin_reflection(response(0.4)).unwrap();
        assert_eq!(state.status(), SessionStatus::AwaitingReflection);

        let answer = state
            .complete_reflection(ticket, ReflectionOutcome::Narrative("Si todos...".to_string()))
            .unwrap();

        assert_eq!(answer.response.value(), 0.4);
        assert_eq!(state.answers().len(), 1);
        assert_eq!(state.status(), SessionStatus::Ready);
        assert_eq!(state.current().unwrap().narrative.as_deref(), Some("Si todos..."));
    }

    #[test]
    fn failed_reflection_records_answer_with_fallback() {
        let mut state = ready_state();
        let ticket = state.begin_reflection(response(1.0)).unwrap();

        let answer = state
            .complete_reflection(
                ticket,
                ReflectionOutcome::Failed {
                    reason: "empty output".to_string(),
                },
            )
            .unwrap();

        assert_eq!(state.answers().len(), 1);
        assert_eq!(answer.narrative.as_deref(), Some(FALLBACK_ANSWER_NARRATIVE));
        assert_eq!(
            state.current().unwrap().narrative.as_deref(),
            Some(FALLBACK_CURRENT_NARRATIVE)
        );
        let notes = state.drain_notifications();
        assert_eq!(notes[0].title, "Error de IA");
    }

    #[test]
    fn second_reflection_while_pending_is_rejected() {
        let mut state = ready_state();
        state.begin_reflection(response(0.5)).unwrap();
        let err = state.begin_reflection(response(0.5)).unwrap_err();
        assert_eq!(err.code, ErrorCode::ReflectionInProgress);
    }

    #[test]
    fn navigation_while_reflecting_is_rejected() {
        let mut state = ready_state();
        state.begin_reflection(response(0.5)).unwrap();
        assert_eq!(
            state.advance_corpus(&corpus()).unwrap_err().code,
            ErrorCode::ReflectionInProgress
        );
        assert!(state.begin_generation().is_err());
    }

    #[test]
    fn stale_reflection_after_clear_is_discarded() {
        let mut state = ready_state();
        let ticket = state.begin_reflection(response(0.5)).unwrap();
        state.clear().unwrap();
        state.begin_initialize().unwrap();
        state.finish_initialize(SessionId::new(), Vec::new(), &corpus()).unwrap();

        let result = state.complete_reflection(ticket, ReflectionOutcome::Narrative("x".into()));

        assert!(result.is_none());
        assert!(state.answers().is_empty());
        assert!(state.current().unwrap().narrative.is_none());
    }

    #[test]
    fn advance_cycles_and_wraps() {
        let mut state = ready_state();
        let corpus = corpus();
        let mut seen = Vec::new();
        for _ in 0..corpus.len() {
            let presented = state.advance_corpus(&corpus).unwrap().unwrap();
            seen.push(presented.dilemma.id().to_string());
        }
        assert_eq!(seen, vec!["B", "C", "A"]);
        assert_eq!(state.cursor(), 0);
    }

    #[test]
    fn advance_attaches_stored_narrative() {
        let mut state = ready_state();
        let corpus = corpus();
        let ticket = state.begin_reflection(response(0.2)).unwrap();
        state.complete_reflection(ticket, ReflectionOutcome::Narrative("guardada".into()));

        for _ in 0..corpus.len() {
            state.advance_corpus(&corpus).unwrap();
        }
        assert_eq!(current_id(&state), "A");
        assert_eq!(state.current().unwrap().narrative.as_deref(), Some("guardada"));
    }

    #[test]
    fn advance_on_empty_corpus_keeps_state_and_notifies() {
        let mut state = ready_state();
        let result = state.advance_corpus(&Corpus::default()).unwrap();
        assert!(result.is_none());
        assert_eq!(current_id(&state), "A");
        assert_eq!(state.drain_notifications()[0].description, "No hay más dilemas en el corpus.");
    }

    #[test]
    fn generation_ticket_carries_digest() {
        let state = ready_state();
        let ticket = state.begin_generation().unwrap();
        assert_eq!(ticket.epoch, 1);
        assert_eq!(ticket.context, "Este es el primer dilema generado para el usuario.");
    }

    #[test]
    fn applied_generation_replaces_current() {
        let mut state = ready_state();
        let ticket = state.begin_generation().unwrap();
        assert!(state.apply_generated(&ticket, generated("nuevo")));
        assert_eq!(state.current().unwrap().dilemma.text(), "nuevo");
    }

    #[test]
    fn stale_generation_is_discarded() {
        let mut state = ready_state();
        let ticket = state.begin_generation().unwrap();
        state.clear().unwrap();
        state.begin_initialize().unwrap();
        state.finish_initialize(SessionId::new(), Vec::new(), &corpus()).unwrap();

        assert!(!state.apply_generated(&ticket, generated("viejo")));
        assert_eq!(current_id(&state), "A");
    }

    #[test]
    fn generation_failure_falls_back_to_corpus() {
        let mut state = ready_state();
        let ticket = state.begin_generation().unwrap();
        let shown = state
            .apply_generation_failure(&ticket, "timeout", &corpus())
            .unwrap();

        assert!(shown.dilemma.is_from_corpus());
        assert_eq!(current_id(&state), "B");
        assert_eq!(state.drain_notifications()[0].title, "Error de RAG");
    }

    #[test]
    fn replace_current_if_requires_same_dilemma() {
        let mut state = ready_state();
        let epoch = state.epoch();
        let first = DilemmaId::new("A").unwrap();

        state.advance_corpus(&corpus()).unwrap();
        assert!(!state.replace_current_if(epoch, &first, generated("tarde")));
        assert_eq!(current_id(&state), "B");

        let second = DilemmaId::new("B").unwrap();
        assert!(state.replace_current_if(epoch, &second, generated("a tiempo")));
        assert_eq!(state.current().unwrap().dilemma.text(), "a tiempo");
    }

    #[test]
    fn advance_corpus_if_honours_epoch() {
        let mut state = ready_state();
        let first = DilemmaId::new("A").unwrap();
        assert!(state.advance_corpus_if(state.epoch() + 1, &first, &corpus()).is_none());
        assert_eq!(current_id(&state), "A");
        assert!(state.advance_corpus_if(state.epoch(), &first, &corpus()).is_some());
    }

    #[test]
    fn clear_resets_everything_and_returns_old_id() {
        let mut state = ready_state();
        let old_id = state.session_id().cloned().unwrap();
        let ticket = state.begin_reflection(response(0.5)).unwrap();
        state.complete_reflection(ticket, ReflectionOutcome::Narrative("n".into()));
        state.advance_corpus(&corpus()).unwrap();

        let removed = state.clear().unwrap();

        assert_eq!(removed, Some(old_id));
        assert_eq!(state.status(), SessionStatus::Cleared);
        assert_eq!(state.epoch(), 2);
        assert!(state.answers().is_empty());
        assert!(state.current().is_none());
        assert_eq!(state.cursor(), 0);
        assert!(state.session_id().is_none());
    }

    #[test]
    fn clear_during_reflection_is_allowed() {
        let mut state = ready_state();
        state.begin_reflection(response(0.5)).unwrap();
        assert!(state.clear().is_ok());
    }

    #[test]
    fn profile_is_cached_until_next_answer() {
        let mut state = ready_state();
        assert_eq!(state.profile().summary, EMPTY_PROFILE_SUMMARY);
        assert!(state.has_cached_profile());

        let ticket = state.begin_reflection(response(0.5)).unwrap();
        state.complete_reflection(ticket, ReflectionOutcome::Narrative("n".into()));
        assert!(!state.has_cached_profile());
        assert_eq!(state.profile().visual_data.unwrap().total_answered, 1);
    }
}
