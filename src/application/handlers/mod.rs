//! Application handlers.
//!
//! Command and query handlers that orchestrate domain operations.

pub mod profile;
pub mod session;

pub use profile::GetProfileHandler;
pub use session::{
    AdvanceDilemmaHandler, AnswerDilemmaCommand, AnswerDilemmaHandler, AnswerDilemmaResult,
    ClearSessionHandler, DrainNotificationsHandler, GenerateDilemmaCommand,
    GenerateDilemmaHandler, GenerateDilemmaResult, GetSessionHandler, InitializeSessionHandler,
    ListAnswersHandler,
};
