//! Mattespel (workspace facade crate).
//!
//! Re-exports the member crates as `mattespel::{core,input,term,types}` and
//! hosts the pieces shared by the binary and the integration tests: command
//! line configuration and the exit summary.

pub mod cli;
pub mod summary;

pub use mattespel_core as core;
pub use mattespel_input as input;
pub use mattespel_term as term;
pub use mattespel_types as types;
