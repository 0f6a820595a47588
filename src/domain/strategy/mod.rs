//! Strategy module - the generated document and everything done with it.
//!
//! - [`StrategyDocument`] is the structured result of the generation service
//! - [`render`] maps a document into the monospace notepad text
//! - [`GenerationSlot`] holds the current document and guards against
//!   concurrent generation calls

mod document;
mod generation;
mod hashtag;
mod renderer;

pub use document::{CalendarEntry, Caption, HashtagPlan, PostIdea, StrategyDocument};
pub use generation::{
    GeneratedStrategy, GenerationPhase, GenerationSlot, GenerationTicket, FAILURE_NOTICE,
};
pub use hashtag::{format_hashtag, normalize_hashtag};
pub use renderer::{export_filename, line_estimate, render, RenderContext};
