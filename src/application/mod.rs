//! Application layer - Commands, Queries, and Handlers.
//!
//! This layer orchestrates domain operations and coordinates between ports.
//! Command handlers mutate the shared session state; query handlers read it.

pub mod handlers;
mod persistence;
mod runtime;

pub use persistence::{answers_key, SessionPersistence, SESSION_ID_KEY};
pub use runtime::{SessionRuntime, SessionSettings, SessionSnapshot};
