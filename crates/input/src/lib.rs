//! Terminal input module (engine-facing).
//!
//! This module is independent of any rendering code. It maps `crossterm` key
//! events into [`crate::types::QuizAction`] and collects the actions that arrive
//! during one frame into a fixed-capacity batch.

pub mod batch;
pub mod map;

pub use mattespel_types as types;

pub use batch::{ActionBatch, BATCH_CAPACITY};
pub use map::{handle_key_event, should_quit};
