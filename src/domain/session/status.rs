//! SessionStatus enum for tracking the lifecycle of the anonymous session.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::StateMachine;

/// Lifecycle status of the session.
///
/// ```text
/// Uninitialized -> Initializing -> Ready <-> AwaitingReflection
///                        ^           |            |
///                        +-- Cleared <------------+
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Uninitialized,
    Initializing,
    Ready,
    AwaitingReflection,
    Cleared,
}

impl SessionStatus {
    /// Returns true if answers can be submitted or dilemmas advanced.
    pub fn is_ready(&self) -> bool {
        matches!(self, SessionStatus::Ready)
    }
}

impl StateMachine for SessionStatus {
    fn can_transition_to(&self, target: &Self) -> bool {
        use SessionStatus::*;
        matches!(
            (self, target),
            (Uninitialized, Initializing)
                | (Initializing, Ready)
                | (Initializing, Uninitialized)
                | (Ready, AwaitingReflection)
                | (AwaitingReflection, Ready)
                | (Ready, Cleared)
                | (AwaitingReflection, Cleared)
                | (Cleared, Initializing)
        )
    }

    fn valid_transitions(&self) -> Vec<Self> {
        use SessionStatus::*;
        match self {
            Uninitialized => vec![Initializing],
            Initializing => vec![Ready, Uninitialized],
            Ready => vec![AwaitingReflection, Cleared],
            AwaitingReflection => vec![Ready, Cleared],
            Cleared => vec![Initializing],
        }
    }
}

impl fmt::Display for SessionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SessionStatus::Uninitialized => "Uninitialized",
            SessionStatus::Initializing => "Initializing",
            SessionStatus::Ready => "Ready",
            SessionStatus::AwaitingReflection => "AwaitingReflection",
            SessionStatus::Cleared => "Cleared",
        };
        write!(f, "{}", s)
    }
}
