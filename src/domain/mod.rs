//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (value objects, IDs, errors)
//! - `dilemma` - Dilemmas, topics, intensities and the bundled corpus
//! - `session` - Session state, answers, lifecycle and notifications
//! - `profile` - Pure aggregation of answers into an ethical profile

pub mod dilemma;
pub mod foundation;
pub mod profile;
pub mod session;
