//! Session persistence over the key-value port.
//!
//! Two keys per installation: the session identifier, and the JSON list of
//! answers for that identifier. An empty answer list is never stored.

use std::sync::Arc;
use tracing::warn;

use crate::domain::foundation::{DomainError, ErrorCode, SessionId};
use crate::domain::session::AnsweredDilemma;
use crate::ports::{KeyValueError, KeyValueStore};

/// Key holding the session identifier.
pub const SESSION_ID_KEY: &str = "kantifySessionUUID";

/// Key holding the answers recorded under `session_id`.
pub fn answers_key(session_id: &SessionId) -> String {
    format!("kantifyAnswers-{}", session_id)
}

impl From<KeyValueError> for DomainError {
    fn from(err: KeyValueError) -> Self {
        DomainError::new(ErrorCode::StorageError, err.to_string())
    }
}

/// Reads and writes session data through a `KeyValueStore`.
#[derive(Clone)]
pub struct SessionPersistence {
    store: Arc<dyn KeyValueStore>,
}

impl SessionPersistence {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    /// Returns the stored identifier, creating and saving one if absent.
    ///
    /// An unparsable stored identifier is replaced.
    pub async fn load_or_create_id(&self) -> Result<SessionId, DomainError> {
        if let Some(raw) = self.store.load(SESSION_ID_KEY).await? {
            match raw.trim().parse::<SessionId>() {
                Ok(id) => return Ok(id),
                Err(e) => warn!(error = %e, "Stored session identifier is invalid, replacing it"),
            }
        }

        let id = SessionId::new();
        self.store.save(SESSION_ID_KEY, &id.to_string()).await?;
        Ok(id)
    }

    /// Loads the answers recorded under `session_id`.
    ///
    /// Corrupt data is logged and treated as no answers.
    pub async fn load_answers(
        &self,
        session_id: &SessionId,
    ) -> Result<Vec<AnsweredDilemma>, DomainError> {
        let Some(raw) = self.store.load(&answers_key(session_id)).await? else {
            return Ok(Vec::new());
        };

        match serde_json::from_str(&raw) {
            Ok(answers) => Ok(answers),
            Err(e) => {
                warn!(%session_id, error = %e, "Stored answers are corrupt, starting empty");
                Ok(Vec::new())
            }
        }
    }

    /// Saves `answers` under `session_id`, removing the key when empty.
    pub async fn save_answers(
        &self,
        session_id: &SessionId,
        answers: &[AnsweredDilemma],
    ) -> Result<(), DomainError> {
        let key = answers_key(session_id);
        if answers.is_empty() {
            self.store.remove(&key).await?;
            return Ok(());
        }

        let json = serde_json::to_string(answers).map_err(|e| {
            DomainError::new(ErrorCode::InternalError, format!("Failed to encode answers: {}", e))
        })?;
        self.store.save(&key, &json).await?;
        Ok(())
    }

    /// Removes the answers of `session_id` and the stored identifier.
    pub async fn forget(&self, session_id: &SessionId) -> Result<(), DomainError> {
        self.store.remove(&answers_key(session_id)).await?;
        self.store.remove(SESSION_ID_KEY).await?;
        Ok(())
    }
}
