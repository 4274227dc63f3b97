//! Round engine - owns the session and drives the Idle/Active state machine
//!
//! All state changes go through five operations:
//!
//! - [`RoundEngine::start_session`]: Idle/Active -> Active, fresh score and level
//! - [`RoundEngine::generate_round`]: replace the current statement, reset the clock
//! - [`RoundEngine::judge`]: match -> next round; mismatch -> Idle + history entry
//! - [`RoundEngine::tick`]: one second passes; at zero behaves like a mismatch
//! - [`RoundEngine::change_mode`]: only while Idle
//!
//! Score and level are kept after an attempt ends and reset by the next
//! `start_session`.

use chrono::Local;
use tracing::{debug, info};

use crate::history::{Feedback, History, HistoryEntry};
use crate::rng::{RandomSource, SimpleRng};
use crate::round::Round;
use crate::snapshot::SessionSnapshot;
use crate::types::{Mode, QuizAction, START_LEVEL};

/// Outcome of a judgment on an active session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Guess matched; the next round is already generated
    Correct,
    /// Guess missed; the attempt ended
    Wrong,
}

#[derive(Debug, Clone)]
pub struct RoundEngine<R = SimpleRng> {
    rng: R,
    mode: Mode,
    level: u32,
    score: u32,
    time_limit: u32,
    time_remaining: u32,
    active: bool,
    round: Option<Round>,
    /// Monotonic id of the current round (increments on every generation).
    round_id: u32,
    /// Monotonic attempt counter (increments on every session start).
    attempt_id: u32,
    feedback: Option<Feedback>,
    history: History,
}

impl RoundEngine<SimpleRng> {
    /// Create an idle engine with a seeded LCG and the default mode
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed), Mode::default())
    }
}

impl<R: RandomSource> RoundEngine<R> {
    /// Create an idle engine around any random source
    pub fn with_rng(rng: R, mode: Mode) -> Self {
        let time_limit = mode.time_limit_secs();
        Self {
            rng,
            mode,
            level: START_LEVEL,
            score: 0,
            time_limit,
            time_remaining: time_limit,
            active: false,
            round: None,
            round_id: 0,
            attempt_id: 0,
            feedback: None,
            history: History::new(),
        }
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn time_limit(&self) -> u32 {
        self.time_limit
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    pub fn active(&self) -> bool {
        self.active
    }

    /// Current (or, while idle, last) round
    pub fn round(&self) -> Option<Round> {
        self.round
    }

    pub fn round_id(&self) -> u32 {
        self.round_id
    }

    /// Round id while a countdown should be running, None while idle
    pub fn active_round_id(&self) -> Option<u32> {
        self.active.then_some(self.round_id)
    }

    pub fn attempt_id(&self) -> u32 {
        self.attempt_id
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.feedback
    }

    pub fn history(&self) -> &History {
        &self.history
    }

    pub fn rng(&self) -> &R {
        &self.rng
    }

    /// Expression of the current round, e.g. `"3 + 4 = 8"`
    pub fn expression(&self) -> Option<String> {
        self.round.map(|r| r.expression())
    }

    pub fn snapshot(&self) -> SessionSnapshot<'_> {
        SessionSnapshot {
            mode: self.mode,
            level: self.level,
            score: self.score,
            time_limit: self.time_limit,
            time_remaining: self.time_remaining,
            active: self.active,
            round: self.round,
            round_id: self.round_id,
            attempt_id: self.attempt_id,
            feedback: self.feedback,
            history: self.history.entries(),
        }
    }

    /// Start (or restart) a session in `mode`
    pub fn start_session(&mut self, mode: Mode) {
        self.mode = mode;
        self.time_limit = mode.time_limit_secs();
        self.time_remaining = self.time_limit;
        self.score = 0;
        self.level = START_LEVEL;
        self.active = true;
        self.attempt_id = self.attempt_id.wrapping_add(1);

        info!(
            attempt = self.attempt_id,
            mode = mode.as_str(),
            time_limit = self.time_limit,
            "session started"
        );

        self.generate_round();
    }

    /// Replace the current round with a new one for the current level.
    ///
    /// Resets the countdown and clears any feedback message.
    pub fn generate_round(&mut self) {
        let round = Round::generate(self.level, &mut self.rng);
        self.round = Some(round);
        self.round_id = self.round_id.wrapping_add(1);
        self.time_remaining = self.time_limit;
        self.feedback = None;

        debug!(
            round = self.round_id,
            level = self.level,
            expression = %round,
            correct = round.is_actually_correct,
            "round generated"
        );
    }

    /// Judge the current statement.
    ///
    /// Returns None (and changes nothing) while the session is idle.
    pub fn judge(&mut self, guess: bool) -> Option<Verdict> {
        if !self.active {
            return None;
        }
        let round = self.round?;

        if round.accepts(guess) {
            self.score += 1;
            self.level += 1;
            debug!(score = self.score, level = self.level, "correct judgment");
            self.generate_round();
            Some(Verdict::Correct)
        } else {
            self.end_attempt(Feedback::Wrong { score: self.score });
            Some(Verdict::Wrong)
        }
    }

    /// Count down one second.
    ///
    /// Returns true when this tick ran the clock out and ended the attempt.
    pub fn tick(&mut self) -> bool {
        if !self.active {
            return false;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.end_attempt(Feedback::Timeout { score: self.score });
            return true;
        }
        false
    }

    /// Select a new mode. Rejected while a session is active.
    pub fn change_mode(&mut self, mode: Mode) -> bool {
        if self.active {
            debug!(requested = mode.as_str(), "mode change ignored while active");
            return false;
        }

        self.mode = mode;
        self.time_limit = mode.time_limit_secs();
        self.time_remaining = self.time_limit;
        info!(mode = mode.as_str(), time_limit = self.time_limit, "mode changed");
        true
    }

    /// Apply a player action. Returns whether any state changed.
    pub fn apply_action(&mut self, action: QuizAction) -> bool {
        match action {
            QuizAction::JudgeTrue => self.judge(true).is_some(),
            QuizAction::JudgeFalse => self.judge(false).is_some(),
            QuizAction::Start => {
                self.start_session(self.mode);
                true
            }
            QuizAction::ChangeMode(mode) => self.change_mode(mode),
            QuizAction::CycleMode => self.change_mode(self.mode.next()),
        }
    }

    fn end_attempt(&mut self, feedback: Feedback) {
        self.history
            .push(HistoryEntry::new(Local::now(), self.score, self.mode));
        self.active = false;
        self.feedback = Some(feedback);

        info!(
            attempt = self.attempt_id,
            score = self.score,
            mode = self.mode.as_str(),
            timeout = matches!(feedback, Feedback::Timeout { .. }),
            "attempt ended"
        );
    }
}

impl Default for RoundEngine<SimpleRng> {
    fn default() -> Self {
        Self::new(1)
    }
}
