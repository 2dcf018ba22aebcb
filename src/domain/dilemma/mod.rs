//! Dilemma module - Ethical scenarios and the bundled corpus.

mod corpus;
mod entity;
mod topic;

pub use corpus::{Corpus, CorpusError};
pub use entity::{Dilemma, DilemmaOrigin, PresentedDilemma};
pub use topic::{EthicalTopic, Intensity};
