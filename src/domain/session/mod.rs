//! Session domain module.
//!
//! A [`StrategySession`] is one user's whole working state: the wizard
//! (transcript, answers, progress) and the generation slot (current
//! document, in-flight guard, failure notice).

mod aggregate;
mod errors;

pub use aggregate::StrategySession;
pub use errors::SessionError;
