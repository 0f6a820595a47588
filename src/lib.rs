//! Content Strategist - conversational intake for social media strategies.
//!
//! A five-question wizard collects brand attributes, a single call to an
//! external generation service turns them into a structured strategy, and the
//! result is rendered as a monospace "notepad" document that can be exported
//! or copied.

pub mod adapters;
pub mod application;
pub mod config;
pub mod domain;
pub mod ports;
