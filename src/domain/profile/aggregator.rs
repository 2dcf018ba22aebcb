//! Ethical profile aggregation.
//!
//! Profiles are derived views over the answered list. They are recomputed
//! from scratch on every call and never persisted.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::domain::dilemma::EthicalTopic;
use crate::domain::session::AnsweredDilemma;

/// Summary shown before any dilemma has been answered.
pub const EMPTY_PROFILE_SUMMARY: &str =
    "Aún no has respondido a ningún dilema. Explora algunos dilemas para generar tu perfil ético.";

/// Chart-oriented aggregates over the answered list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VisualData {
    pub total_answered: usize,
    /// Distinct topics in order of first appearance.
    pub topics_list: Vec<EthicalTopic>,
    pub average_response_per_topic: BTreeMap<EthicalTopic, f64>,
}

/// Derived ethical profile.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EthicalProfile {
    pub summary: String,
    pub visual_data: Option<VisualData>,
    /// Answers sorted newest first.
    pub answered_dilemmas: Vec<AnsweredDilemma>,
}

impl EthicalProfile {
    /// Returns true if no answers contributed to the profile.
    pub fn is_empty(&self) -> bool {
        self.answered_dilemmas.is_empty()
    }
}

/// Builds a profile from the answered list.
pub fn generate_profile(answers: &[AnsweredDilemma]) -> EthicalProfile {
    if answers.is_empty() {
        return EthicalProfile {
            summary: EMPTY_PROFILE_SUMMARY.to_string(),
            visual_data: None,
            answered_dilemmas: Vec::new(),
        };
    }

    let mut topics_list: Vec<EthicalTopic> = Vec::new();
    let mut sums: BTreeMap<EthicalTopic, (f64, usize)> = BTreeMap::new();

    for answer in answers {
        let topic = answer.dilemma.topic();
        if !topics_list.contains(&topic) {
            topics_list.push(topic);
        }
        let entry = sums.entry(topic).or_insert((0.0, 0));
        entry.0 += answer.response.value();
        entry.1 += 1;
    }

    let average_response_per_topic = sums
        .into_iter()
        .map(|(topic, (sum, count))| (topic, sum / count as f64))
        .collect();

    let summary = format!(
        "Has reflexionado sobre {} dilema(s) cubriendo {} tópico(s) ético(s) único(s).",
        answers.len(),
        topics_list.len()
    );

    let mut answered_dilemmas = answers.to_vec();
    answered_dilemmas.sort_by(|a, b| b.answered_at.cmp(&a.answered_at));

    EthicalProfile {
        summary,
        visual_data: Some(VisualData {
            total_answered: answers.len(),
            topics_list,
            average_response_per_topic,
        }),
        answered_dilemmas,
    }
}
