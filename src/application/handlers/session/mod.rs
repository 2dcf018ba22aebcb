//! Session command and query handlers.

mod advance_dilemma;
mod answer_dilemma;
mod clear_session;
mod generate_dilemma;
mod get_session;
mod initialize_session;

#[cfg(test)]
pub(crate) mod test_support;

pub use advance_dilemma::AdvanceDilemmaHandler;
pub use answer_dilemma::{AnswerDilemmaCommand, AnswerDilemmaHandler, AnswerDilemmaResult};
pub use clear_session::ClearSessionHandler;
pub use generate_dilemma::{GenerateDilemmaCommand, GenerateDilemmaHandler, GenerateDilemmaResult};
pub use get_session::{DrainNotificationsHandler, GetSessionHandler, ListAnswersHandler};
pub use initialize_session::InitializeSessionHandler;
