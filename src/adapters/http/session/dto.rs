//! HTTP DTOs for session endpoints.
//!
//! These types decouple the HTTP API from domain types, allowing independent evolution.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::application::handlers::session::{
    AnswerDilemmaResult, GenerateDilemmaCommand, GenerateDilemmaResult,
};
use crate::application::SessionSnapshot;
use crate::domain::dilemma::{DilemmaOrigin, EthicalTopic, Intensity, PresentedDilemma};
use crate::domain::session::{AnsweredDilemma, Notification, NotificationLevel, SessionStatus};

// ════════════════════════════════════════════════════════════════════════════
// Request DTOs
// ════════════════════════════════════════════════════════════════════════════

/// Request to answer the current dilemma.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerRequest {
    pub response: f64,
}

/// Request to generate a dilemma. Missing fields are picked at random.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct GenerateRequest {
    #[serde(default)]
    pub topic: Option<EthicalTopic>,
    #[serde(default)]
    pub intensity: Option<Intensity>,
}

impl GenerateRequest {
    pub fn into_command<R: Rng + ?Sized>(self, rng: &mut R) -> GenerateDilemmaCommand {
        let topic = match self.topic {
            Some(topic) => topic,
            None => EthicalTopic::random(rng),
        };
        let intensity = match self.intensity {
            Some(intensity) => intensity,
            None => Intensity::random(rng),
        };
        GenerateDilemmaCommand { topic, intensity }
    }
}

// ════════════════════════════════════════════════════════════════════════════
// Response DTOs
// ════════════════════════════════════════════════════════════════════════════

/// A dilemma as shown to the user.
#[derive(Debug, Clone, Serialize)]
pub struct DilemmaResponse {
    pub id: String,
    pub text: String,
    pub topic: EthicalTopic,
    pub intensity: Intensity,
    #[serde(flatten)]
    pub origin: DilemmaOrigin,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<String>,
}

impl From<PresentedDilemma> for DilemmaResponse {
    fn from(presented: PresentedDilemma) -> Self {
        let dilemma = presented.dilemma;
        Self {
            id: dilemma.id().to_string(),
            text: dilemma.text().to_string(),
            topic: dilemma.topic(),
            intensity: dilemma.intensity(),
            origin: dilemma.origin().clone(),
            narrative: presented.narrative,
        }
    }
}

/// Session view for API responses.
#[derive(Debug, Clone, Serialize)]
pub struct SessionResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    pub status: SessionStatus,
    pub current: Option<DilemmaResponse>,
    pub answered_count: usize,
    pub corpus_position: usize,
    pub corpus_size: usize,
}

impl From<SessionSnapshot> for SessionResponse {
    fn from(snapshot: SessionSnapshot) -> Self {
        Self {
            session_id: snapshot.session_id.map(|id| id.to_string()),
            status: snapshot.status,
            current: snapshot.current.map(Into::into),
            answered_count: snapshot.answered_count,
            corpus_position: snapshot.corpus_position,
            corpus_size: snapshot.corpus_size,
        }
    }
}

/// One recorded answer.
#[derive(Debug, Clone, Serialize)]
pub struct AnsweredDilemmaResponse {
    pub dilemma_id: String,
    pub dilemma_text: String,
    pub topic: EthicalTopic,
    pub intensity: Intensity,
    pub response: f64,
    pub narrative: Option<String>,
    pub answered_at: String,
}

impl From<AnsweredDilemma> for AnsweredDilemmaResponse {
    fn from(answer: AnsweredDilemma) -> Self {
        Self {
            dilemma_id: answer.dilemma.id().to_string(),
            dilemma_text: answer.dilemma.text().to_string(),
            topic: answer.dilemma.topic(),
            intensity: answer.dilemma.intensity(),
            response: answer.response.value(),
            narrative: answer.narrative,
            answered_at: answer.answered_at.as_datetime().to_rfc3339(),
        }
    }
}

/// Response to an answer submission.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerResponse {
    pub answer: AnsweredDilemmaResponse,
    pub reflection_failed: bool,
}

impl From<AnswerDilemmaResult> for AnswerResponse {
    fn from(result: AnswerDilemmaResult) -> Self {
        Self {
            answer: result.answer.into(),
            reflection_failed: result.reflection_failed,
        }
    }
}

/// List of recorded answers, oldest first.
#[derive(Debug, Clone, Serialize)]
pub struct AnswerListResponse {
    pub items: Vec<AnsweredDilemmaResponse>,
    pub total: usize,
}

impl From<Vec<AnsweredDilemma>> for AnswerListResponse {
    fn from(answers: Vec<AnsweredDilemma>) -> Self {
        Self {
            total: answers.len(),
            items: answers.into_iter().map(Into::into).collect(),
        }
    }
}

/// Dilemma shown after navigation or generation.
#[derive(Debug, Clone, Serialize)]
pub struct CurrentDilemmaResponse {
    pub current: Option<DilemmaResponse>,
    pub fell_back: bool,
}

impl From<GenerateDilemmaResult> for CurrentDilemmaResponse {
    fn from(result: GenerateDilemmaResult) -> Self {
        Self {
            current: result.current.map(Into::into),
            fell_back: result.fell_back,
        }
    }
}

impl From<Option<PresentedDilemma>> for CurrentDilemmaResponse {
    fn from(current: Option<PresentedDilemma>) -> Self {
        Self {
            current: current.map(Into::into),
            fell_back: false,
        }
    }
}

/// A user-visible notification.
#[derive(Debug, Clone, Serialize)]
pub struct NotificationResponse {
    pub title: String,
    pub description: String,
    pub level: NotificationLevel,
    pub created_at: String,
}

impl From<Notification> for NotificationResponse {
    fn from(notification: Notification) -> Self {
        Self {
            title: notification.title,
            description: notification.description,
            level: notification.level,
            created_at: notification.created_at.as_datetime().to_rfc3339(),
        }
    }
}
