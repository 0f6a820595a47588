//! Storage Adapters
//!
//! - **InMemorySessionStore** - keeps live sessions in process memory

mod in_memory_session_store;

pub use in_memory_session_store::InMemorySessionStore;
