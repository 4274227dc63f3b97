//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are plain data with no behavior beyond parsing and formatting, making
//! them usable in any context (engine logic, terminal rendering, input mapping).
//!
//! # Difficulty Modes
//!
//! The mode selects how long the player has to judge each statement:
//!
//! | Mode | Time per round |
//! |------|----------------|
//! | `easy` | 7s |
//! | `medium` | 5s |
//! | `hard` | 3s |
//!
//! # Operand Scaling
//!
//! Operands are drawn from `[1, OPERAND_SCALE * level]`, so every correct answer
//! widens the range by two. Incorrect statements are offset upward by
//! `1..=MAX_WRONG_OFFSET`.
//!
//! # Examples
//!
//! ```
//! use mattespel_types::{Mode, Operator, QuizAction};
//!
//! // Parse a mode (case-insensitive)
//! let mode = Mode::from_str("Hard").unwrap();
//! assert_eq!(mode, Mode::Hard);
//! assert_eq!(mode.time_limit_secs(), 3);
//!
//! // Modes cycle easy -> medium -> hard -> easy
//! assert_eq!(Mode::Hard.next(), Mode::Easy);
//!
//! // Operators know their symbol
//! assert_eq!(Operator::Subtract.symbol(), '-');
//!
//! // Actions carry the selected mode where needed
//! let action = QuizAction::ChangeMode(Mode::Medium);
//! assert_eq!(action.as_str(), "changeMode");
//! ```

use serde::{Deserialize, Serialize};

/// Countdown tick interval in milliseconds (one tick per second)
pub const TICK_MS: u32 = 1000;

/// Main loop frame interval in milliseconds
///
/// Input is polled at least this often, and the countdown ticker is advanced
/// by the measured elapsed time.
pub const FRAME_MS: u32 = 50;

/// Operand upper bound multiplier: operands lie in `[1, OPERAND_SCALE * level]`
pub const OPERAND_SCALE: u32 = 2;

/// Largest upward offset applied to an incorrect statement
pub const MAX_WRONG_OFFSET: u32 = 3;

/// Level a fresh session starts at
pub const START_LEVEL: u32 = 1;

/// Seconds per round in easy mode
pub const EASY_TIME_LIMIT_SECS: u32 = 7;

/// Seconds per round in medium mode
pub const MEDIUM_TIME_LIMIT_SECS: u32 = 5;

/// Seconds per round in hard mode
pub const HARD_TIME_LIMIT_SECS: u32 = 3;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(TICK_MS, 1000);
        assert_eq!(EASY_TIME_LIMIT_SECS, 7);
        assert_eq!(MEDIUM_TIME_LIMIT_SECS, 5);
        assert_eq!(HARD_TIME_LIMIT_SECS, 3);
        assert_eq!(OPERAND_SCALE, 2);
        assert_eq!(MAX_WRONG_OFFSET, 3);
        assert_eq!(START_LEVEL, 1);
    }

    #[test]
    fn mode_time_limits_follow_constants() {
        assert_eq!(Mode::Easy.time_limit_secs(), EASY_TIME_LIMIT_SECS);
        assert_eq!(Mode::Medium.time_limit_secs(), MEDIUM_TIME_LIMIT_SECS);
        assert_eq!(Mode::Hard.time_limit_secs(), HARD_TIME_LIMIT_SECS);
    }

    #[test]
    fn mode_round_trips_through_str() {
        for mode in Mode::ALL {
            assert_eq!(Mode::from_str(mode.as_str()), Some(mode));
        }
        assert_eq!(Mode::from_str("MEDIUM"), Some(Mode::Medium));
        assert_eq!(Mode::from_str("nightmare"), None);
    }

    #[test]
    fn operator_apply() {
        assert_eq!(Operator::Add.apply(4, 3), 7);
        assert_eq!(Operator::Subtract.apply(4, 3), 1);
        assert_eq!(Operator::Subtract.apply(3, 3), 0);
    }
}

/// Difficulty tier controlling the per-round time budget
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Mode {
    /// All modes in cycling order
    pub const ALL: [Mode; 3] = [Mode::Easy, Mode::Medium, Mode::Hard];

    /// Parse mode from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use mattespel_types::Mode;
    ///
    /// assert_eq!(Mode::from_str("easy"), Some(Mode::Easy));
    /// assert_eq!(Mode::from_str("Medium"), Some(Mode::Medium));
    /// assert_eq!(Mode::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "easy" => Some(Mode::Easy),
            "medium" => Some(Mode::Medium),
            "hard" => Some(Mode::Hard),
            _ => None,
        }
    }

    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            Mode::Easy => "easy",
            Mode::Medium => "medium",
            Mode::Hard => "hard",
        }
    }

    /// Seconds the player gets to judge one statement
    pub fn time_limit_secs(&self) -> u32 {
        match self {
            Mode::Easy => EASY_TIME_LIMIT_SECS,
            Mode::Medium => MEDIUM_TIME_LIMIT_SECS,
            Mode::Hard => HARD_TIME_LIMIT_SECS,
        }
    }

    /// Next mode in cycling order (wraps from hard back to easy)
    pub fn next(&self) -> Self {
        match self {
            Mode::Easy => Mode::Medium,
            Mode::Medium => Mode::Hard,
            Mode::Hard => Mode::Easy,
        }
    }
}

/// Arithmetic operator of a generated statement
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Subtract,
}

impl Operator {
    /// Symbol used in the rendered expression
    pub fn symbol(&self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Subtract => '-',
        }
    }

    /// Apply the operator.
    ///
    /// Callers guarantee `a >= b` for subtraction; the result saturates at zero
    /// otherwise.
    pub fn apply(&self, a: u32, b: u32) -> u32 {
        match self {
            Operator::Add => a + b,
            Operator::Subtract => a.saturating_sub(b),
        }
    }
}

/// Player intents dispatched to the round engine
///
/// Produced by key mapping in the terminal front end; the engine never sees
/// raw key codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizAction {
    /// The shown statement is correct
    JudgeTrue,
    /// The shown statement is wrong
    JudgeFalse,
    /// Start a new session with the currently selected mode
    Start,
    /// Select a specific mode (only while idle)
    ChangeMode(Mode),
    /// Select the next mode in cycling order (only while idle)
    CycleMode,
}

impl QuizAction {
    /// Convert to camelCase string (for logging)
    pub fn as_str(&self) -> &'static str {
        match self {
            QuizAction::JudgeTrue => "judgeTrue",
            QuizAction::JudgeFalse => "judgeFalse",
            QuizAction::Start => "start",
            QuizAction::ChangeMode(_) => "changeMode",
            QuizAction::CycleMode => "cycleMode",
        }
    }
}
