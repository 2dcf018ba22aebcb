//! Profile domain module.
//!
//! Aggregates a session's answers into an ethical profile: how many
//! dilemmas were answered, which topics they covered and the mean
//! response per topic.

mod aggregator;

pub use aggregator::{generate_profile, EthicalProfile, VisualData, EMPTY_PROFILE_SUMMARY};
