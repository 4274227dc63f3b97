//! Core quiz logic - pure, deterministic, and testable
//!
//! This crate contains the round generator, the session state machine and the
//! countdown bookkeeping. It has **no dependencies** on terminal I/O, making it:
//!
//! - **Deterministic**: Same seed (or script) produces identical rounds
//! - **Testable**: Every transition is reachable from unit tests
//! - **Portable**: Any front end can drive it by calling five operations
//!
//! # Module Structure
//!
//! - [`engine`]: [`RoundEngine`], the Idle/Active state machine
//! - [`round`]: statement generation (`A ± B = R`, correct or offset)
//! - [`rng`]: injectable random sources
//! - [`history`]: append-only attempt history and end-of-attempt feedback
//! - [`ticker`]: converts frame time into one-second countdown ticks
//! - [`snapshot`]: borrowed view of the engine for renderers
//!
//! # Rules
//!
//! - Operands are drawn from `[1, 2 * level]`; subtraction never goes negative
//! - Half of all statements are correct; the rest are off by +1..=+3
//! - A correct judgment raises score and level by one and deals the next round
//! - A wrong judgment or an expired countdown ends the attempt and records it
//!
//! # Example
//!
//! ```
//! use mattespel_core::RoundEngine;
//! use mattespel_types::Mode;
//!
//! let mut engine = RoundEngine::new(12345);
//! engine.start_session(Mode::Hard);
//!
//! // Judge the statement correctly
//! let truth = engine.round().unwrap().is_actually_correct;
//! engine.judge(truth);
//! assert_eq!(engine.score(), 1);
//! assert_eq!(engine.level(), 2);
//!
//! // Let the clock run out
//! while engine.active() {
//!     engine.tick();
//! }
//! assert_eq!(engine.history().len(), 1);
//! ```

pub mod engine;
pub mod history;
pub mod rng;
pub mod round;
pub mod snapshot;
pub mod ticker;

pub use mattespel_types as types;

// Re-export commonly used types for convenience
pub use engine::{RoundEngine, Verdict};
pub use history::{Feedback, History, HistoryEntry, TIMESTAMP_FORMAT};
pub use rng::{RandomSource, ScriptedRng, SimpleRng};
pub use round::{operand_bound, Round};
pub use snapshot::SessionSnapshot;
pub use ticker::CountdownTicker;
