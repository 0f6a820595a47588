//! HTTP adapter for strategy session endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    CapturedResponse, CopyResponse, ErrorResponse, GenerateResponse, GenerationStatusResponse,
    QuestionResponse, SessionResponse, SubmitMessageRequest, SubmitMessageResponse,
};
pub use handlers::StrategyAppState;
pub use routes::{strategy_router, strategy_routes};
