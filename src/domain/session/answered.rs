//! Answer records.

use serde::{Deserialize, Serialize};

use crate::domain::dilemma::Dilemma;
use crate::domain::foundation::{ResponseValue, Timestamp};

/// Narrative stored on an answer when reflection generation fails.
pub const FALLBACK_ANSWER_NARRATIVE: &str =
    "Error al generar la reflexión. Por favor, inténtalo más tarde o revisa la consola para más detalles.";

/// Short narrative shown on the current dilemma when reflection generation fails.
pub const FALLBACK_CURRENT_NARRATIVE: &str = "Error al generar la reflexión.";

/// One answered dilemma.
///
/// Stores the dilemma as it was answered, without the narrative that was
/// shown alongside it. Records are immutable once appended.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsweredDilemma {
    pub dilemma: Dilemma,
    pub response: ResponseValue,
    pub narrative: Option<String>,
    pub answered_at: Timestamp,
}

impl AnsweredDilemma {
    /// Creates a record stamped with the current time.
    pub fn new(dilemma: Dilemma, response: ResponseValue, narrative: Option<String>) -> Self {
        Self {
            dilemma,
            response,
            narrative,
            answered_at: Timestamp::now(),
        }
    }
}
