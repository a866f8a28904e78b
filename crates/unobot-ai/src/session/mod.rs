//! Conversation session management.
//!
//! A `Session` holds the ordered message history for one interactive run.
//! It is seeded with a single system message carrying the manual and grows
//! by one user and one assistant message per turn.

mod chat;
mod manager;
mod prompt;


pub use manager::Session;
pub use prompt::build_system_prompt;
