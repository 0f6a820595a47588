//! Wizard command and query handlers.

mod close_session;
mod get_session;
mod reset_session;
mod start_session;
mod submit_answer;

pub use close_session::CloseSessionHandler;
pub use get_session::GetSessionHandler;
pub use reset_session::ResetSessionHandler;
pub use start_session::StartSessionHandler;
pub use submit_answer::{SubmitAnswerCommand, SubmitAnswerHandler, SubmitAnswerResult};
