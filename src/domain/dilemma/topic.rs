//! Ethical topics and intensity tiers.
//!
//! Both enums serialize with the product's Spanish catalogue names, which
//! are also the values the RAG service accepts on the wire.

use rand::Rng;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::ValidationError;

/// One of the six ethical themes dilemmas are organized around.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum EthicalTopic {
    #[serde(rename = "Temporalidad Moral")]
    MoralTemporality,
    #[serde(rename = "Alteridad Radical")]
    RadicalAlterity,
    #[serde(rename = "Imperativo de Universalización")]
    UniversalizationImperative,
    #[serde(rename = "Ontología de la Ignorancia")]
    OntologyOfIgnorance,
    #[serde(rename = "Economía Moral del Deseo")]
    MoralEconomyOfDesire,
    #[serde(rename = "Microética Cotidiana")]
    EverydayMicroethics,
}

impl EthicalTopic {
    /// All topics in catalogue order.
    pub const ALL: [EthicalTopic; 6] = [
        EthicalTopic::MoralTemporality,
        EthicalTopic::RadicalAlterity,
        EthicalTopic::UniversalizationImperative,
        EthicalTopic::OntologyOfIgnorance,
        EthicalTopic::MoralEconomyOfDesire,
        EthicalTopic::EverydayMicroethics,
    ];

    /// Returns the catalogue name.
    pub fn name(&self) -> &'static str {
        match self {
            EthicalTopic::MoralTemporality => "Temporalidad Moral",
            EthicalTopic::RadicalAlterity => "Alteridad Radical",
            EthicalTopic::UniversalizationImperative => "Imperativo de Universalización",
            EthicalTopic::OntologyOfIgnorance => "Ontología de la Ignorancia",
            EthicalTopic::MoralEconomyOfDesire => "Economía Moral del Deseo",
            EthicalTopic::EverydayMicroethics => "Microética Cotidiana",
        }
    }

    /// Picks a topic uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for EthicalTopic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for EthicalTopic {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|topic| topic.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| ValidationError::invalid_format("topic", format!("unknown topic '{}'", s)))
    }
}

/// Ordinal intensity tier of a dilemma.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Intensity {
    /// Everyday situations.
    #[serde(rename = "Suave")]
    Mild,
    /// Decisions with significant consequences.
    #[serde(rename = "Medio")]
    Medium,
    /// Life-or-death stakes.
    #[serde(rename = "Extremo")]
    Extreme,
}

impl Intensity {
    /// All tiers in ascending order.
    pub const ALL: [Intensity; 3] = [Intensity::Mild, Intensity::Medium, Intensity::Extreme];

    /// Returns the catalogue name.
    pub fn name(&self) -> &'static str {
        match self {
            Intensity::Mild => "Suave",
            Intensity::Medium => "Medio",
            Intensity::Extreme => "Extremo",
        }
    }

    /// Picks a tier uniformly at random.
    pub fn random<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::ALL[rng.gen_range(0..Self::ALL.len())]
    }
}

impl fmt::Display for Intensity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Intensity {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|intensity| intensity.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| {
                ValidationError::invalid_format("intensity", format!("unknown intensity '{}'", s))
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn topic_serializes_with_catalogue_name() {
        let json = serde_json::to_string(&EthicalTopic::UniversalizationImperative).unwrap();
        assert_eq!(json, "\"Imperativo de Universalización\"");
    }

    #[test]
    fn topic_round_trips_every_variant_through_from_str() {
        for topic in EthicalTopic::ALL {
            assert_eq!(topic.name().parse::<EthicalTopic>().unwrap(), topic);
        }
    }

    #[test]
    fn topic_parse_is_case_insensitive_and_trims() {
        assert_eq!(
            "  temporalidad moral ".parse::<EthicalTopic>().unwrap(),
            EthicalTopic::MoralTemporality
        );
    }

    #[test]
    fn unknown_topic_is_rejected() {
        assert!("Estética".parse::<EthicalTopic>().is_err());
    }

    #[test]
    fn intensity_is_ordinal() {
        assert!(Intensity::Mild < Intensity::Medium);
        assert!(Intensity::Medium < Intensity::Extreme);
    }

    #[test]
    fn intensity_serializes_with_catalogue_name() {
        assert_eq!(serde_json::to_string(&Intensity::Extreme).unwrap(), "\"Extremo\"");
        assert_eq!(
            serde_json::from_str::<Intensity>("\"Suave\"").unwrap(),
            Intensity::Mild
        );
    }

    #[test]
    fn random_picks_are_deterministic_for_a_seed() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        for _ in 0..10 {
            assert_eq!(EthicalTopic::random(&mut a), EthicalTopic::random(&mut b));
            assert_eq!(Intensity::random(&mut a), Intensity::random(&mut b));
        }
    }
}
