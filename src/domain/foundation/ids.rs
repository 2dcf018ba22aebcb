//! Strongly-typed identifier value objects.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

use super::{Timestamp, ValidationError};

/// Unique identifier for an anonymous session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SessionId(Uuid);

impl SessionId {
    /// Creates a new random SessionId.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates a SessionId from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the inner UUID.
    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for SessionId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for SessionId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self(Uuid::parse_str(s.trim())?))
    }
}

/// Identifier of a dilemma.
///
/// Corpus entries carry their catalogue code (e.g. `TM_S_01`); remotely
/// generated dilemmas get a synthetic `<prefix>-<unix millis>` identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DilemmaId(String);

impl DilemmaId {
    /// Creates a new DilemmaId, returning error if empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ValidationError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ValidationError::empty_field("dilemma_id"));
        }
        Ok(Self(id))
    }

    /// Creates a synthetic identifier for a generated dilemma.
    pub fn synthetic(prefix: &str) -> Self {
        Self(format!("{}-{}", prefix, Timestamp::now().as_unix_millis()))
    }

    /// Returns the inner string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns true if this identifier was minted for a generated dilemma.
    pub fn is_synthetic(&self) -> bool {
        ["rag-", "generated-"]
            .iter()
            .any(|prefix| self.0.starts_with(prefix))
    }
}

impl fmt::Display for DilemmaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn session_id_generates_unique_values() {
        let id1 = SessionId::new();
        let id2 = SessionId::new();
        assert_ne!(id1, id2);
    }

    #[test]
    fn session_id_parses_from_string() {
        let uuid_str = "550e8400-e29b-41d4-a716-446655440000";
        let id: SessionId = uuid_str.parse().unwrap();
        assert_eq!(id.to_string(), uuid_str);
    }

    #[test]
    fn session_id_parse_tolerates_surrounding_whitespace() {
        let id: SessionId = " 550e8400-e29b-41d4-a716-446655440000\n".parse().unwrap();
        assert_eq!(id.to_string(), "550e8400-e29b-41d4-a716-446655440000");
    }

    #[test]
    fn session_id_rejects_garbage() {
        assert!("not-a-uuid".parse::<SessionId>().is_err());
    }

    #[test]
    fn session_id_serializes_transparently() {
        let id = SessionId::new();
        let json = serde_json::to_string(&id).unwrap();
        assert_eq!(json, format!("\"{}\"", id));
    }

    #[test]
    fn dilemma_id_rejects_empty() {
        assert!(DilemmaId::new("").is_err());
        assert!(DilemmaId::new("   ").is_err());
    }

    #[test]
    fn dilemma_id_accepts_corpus_codes() {
        let id = DilemmaId::new("TM_S_01").unwrap();
        assert_eq!(id.as_str(), "TM_S_01");
        assert!(!id.is_synthetic());
    }

    #[test]
    fn synthetic_dilemma_id_has_prefix() {
        let id = DilemmaId::synthetic("rag");
        assert!(id.as_str().starts_with("rag-"));
        assert!(id.is_synthetic());

        let id = DilemmaId::synthetic("generated");
        assert!(id.as_str().starts_with("generated-"));
        assert!(id.is_synthetic());
    }
}
