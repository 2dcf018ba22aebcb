//! User-visible notifications.
//!
//! Notifications are queued on the session state and drained by the
//! client. The queue is bounded; the oldest entry is dropped on overflow.

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::domain::foundation::Timestamp;

/// Maximum number of notifications kept before the oldest is dropped.
pub const MAX_PENDING_NOTIFICATIONS: usize = 20;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationLevel {
    Info,
    Error,
}

/// A short title/description pair shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub level: NotificationLevel,
    pub created_at: Timestamp,
}

impl Notification {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Info, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::with_level(NotificationLevel::Error, title, description)
    }

    fn with_level(
        level: NotificationLevel,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            level,
            created_at: Timestamp::now(),
        }
    }

    /// No corpus entry could be loaded at initialization.
    pub fn corpus_unavailable() -> Self {
        Self::info("Sin dilemas", "No se pudo cargar el corpus inicial de dilemas.")
    }

    /// The corpus is empty when advancing.
    pub fn corpus_exhausted() -> Self {
        Self::info("Sin dilemas", "No hay más dilemas en el corpus.")
    }

    /// Reflection generation failed; the fallback narrative was used.
    pub fn reflection_failed(reason: &str) -> Self {
        Self::error(
            "Error de IA",
            format!("No se pudo generar la reflexión kantiana: {}", reason),
        )
    }

    /// An explicitly requested dilemma was generated.
    pub fn dilemma_generated() -> Self {
        Self::info(
            "Dilema generado",
            "Nuevo dilema basado en fundamentos filosóficos generado exitosamente.",
        )
    }

    /// A follow-up dilemma replaced the answered one.
    pub fn follow_up_ready(topic: &str) -> Self {
        Self::info(
            "Nuevo dilema generado",
            format!("Dilema sobre \"{}\" listo para responder.", topic),
        )
    }

    /// Remote generation failed and a corpus dilemma is shown instead.
    pub fn generation_failed(reason: &str) -> Self {
        Self::error(
            "Error de RAG",
            format!(
                "No se pudo generar un nuevo dilema: {}. Se mostrará uno del corpus.",
                reason
            ),
        )
    }
}

/// Bounded FIFO of pending notifications.
#[derive(Debug, Clone, Default)]
pub struct NotificationQueue {
    pending: VecDeque<Notification>,
}

impl NotificationQueue {
    pub fn push(&mut self, notification: Notification) {
        if self.pending.len() == MAX_PENDING_NOTIFICATIONS {
            self.pending.pop_front();
        }
        self.pending.push_back(notification);
    }

    /// Removes and returns every pending notification, oldest first.
    pub fn drain(&mut self) -> Vec<Notification> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}
