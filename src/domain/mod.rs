//! Domain layer - pure business logic with no infrastructure dependencies.
//!
//! - `foundation` - identifiers, timestamps, state machine trait, errors
//! - `wizard` - the scripted five-question intake
//! - `strategy` - generated document, rendering, generation guard
//! - `session` - aggregate tying one wizard to one generation slot

pub mod foundation;
pub mod session;
pub mod strategy;
pub mod wizard;
