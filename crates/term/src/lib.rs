//! Terminal front end for the quiz.
//!
//! This is a small rendering layer for terminal play. It avoids widget
//! toolkits and instead renders into a simple framebuffer that is flushed to
//! the terminal with crossterm.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure so layouts can be asserted cell by cell
//! - Only emit changed cells once the first frame is on screen

pub mod fb;
pub mod quiz_view;
pub mod renderer;
pub mod throttle;

pub use mattespel_core as core;
pub use mattespel_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use quiz_view::{time_bar_fill, AnchorY, Layout, QuizView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, TerminalRenderer};
pub use throttle::FrameThrottle;
