//! Session domain module.
//!
//! One anonymous session: its identifier, the append-only answered list,
//! the dilemma currently shown and the lifecycle that guards them.
//!
//! # Lifecycle
//!
//! - `Uninitialized` until the identifier and answers are restored
//! - `Ready` while the user can answer or navigate
//! - `AwaitingReflection` while a narrative is being generated
//! - `Cleared` after the user discards the session

mod answered;
mod context;
mod notification;
mod state;
mod status;

pub use answered::{AnsweredDilemma, FALLBACK_ANSWER_NARRATIVE, FALLBACK_CURRENT_NARRATIVE};
pub use context::{answer_digest, INITIAL_DILEMMA_CONTEXT, NO_ANSWERS_CONTEXT};
pub use notification::{
    Notification, NotificationLevel, NotificationQueue, MAX_PENDING_NOTIFICATIONS,
};
pub use state::{AppState, GenerationTicket, ReflectionOutcome, ReflectionTicket};
pub use status::SessionStatus;
