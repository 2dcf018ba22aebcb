//! Natural-language digest of a session's answers, sent to remote generators.

use super::AnsweredDilemma;

/// Context sent with the first remote dilemma request of a session.
pub const INITIAL_DILEMMA_CONTEXT: &str = "Este es el primer dilema para el usuario.";

/// Context sent when generating with no answers recorded yet.
pub const NO_ANSWERS_CONTEXT: &str = "Este es el primer dilema generado para el usuario.";

/// Summarizes the answer count and the most recent answer.
pub fn answer_digest(answers: &[AnsweredDilemma]) -> String {
    match answers.last() {
        None => NO_ANSWERS_CONTEXT.to_string(),
        Some(last) => format!(
            "El usuario ha respondido a {} dilemas. La última respuesta sobre el tópico '{}' fue {}.",
            answers.len(),
            last.dilemma.topic(),
            last.response
        ),
    }
}
