//! Kantify - Ethical dilemma sessions with universalization reflections
//!
//! A session walks the user through a bundled corpus of ethical dilemmas.
//! Each answer on the 0..1 scale is reflected back through a Kantian
//! universalization narrative, and the answered list aggregates into an
//! ethical profile. Fresh dilemmas can be generated through a RAG service
//! or a language model prompt seeded from the corpus.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
