use std::hash::{Hash, Hasher};

use crate::history::{Feedback, HistoryEntry};
use crate::round::Round;
use crate::types::Mode;

/// Borrowed, render-ready view of a [`RoundEngine`](crate::RoundEngine).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SessionSnapshot<'a> {
    pub mode: Mode,
    pub level: u32,
    pub score: u32,
    pub time_limit: u32,
    pub time_remaining: u32,
    pub active: bool,
    pub round: Option<Round>,
    pub round_id: u32,
    pub attempt_id: u32,
    pub feedback: Option<Feedback>,
    pub history: &'a [HistoryEntry],
}

impl<'a> SessionSnapshot<'a> {
    pub fn expression(&self) -> Option<String> {
        self.round.map(|r| r.expression())
    }

    /// Whether the player can judge right now.
    pub fn playable(&self) -> bool {
        self.active && self.round.is_some()
    }

    /// Stable 64-bit fingerprint of everything the view draws.
    ///
    /// History is append-only, so its length stands in for its contents.
    pub fn fingerprint(&self) -> u64 {
        let mut h = Fnv1aHasher::new();
        self.mode.hash(&mut h);
        self.level.hash(&mut h);
        self.score.hash(&mut h);
        self.time_limit.hash(&mut h);
        self.time_remaining.hash(&mut h);
        self.active.hash(&mut h);
        self.round.hash(&mut h);
        self.round_id.hash(&mut h);
        self.attempt_id.hash(&mut h);
        self.feedback.hash(&mut h);
        self.history.len().hash(&mut h);
        h.finish()
    }
}

/// FNV-1a hasher; output is stable across Rust versions, unlike `DefaultHasher`.
#[derive(Debug, Clone)]
struct Fnv1aHasher {
    state: u64,
}

impl Fnv1aHasher {
    const OFFSET_BASIS: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;

    fn new() -> Self {
        Self {
            state: Self::OFFSET_BASIS,
        }
    }
}

impl Hasher for Fnv1aHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state ^= b as u64;
            self.state = self.state.wrapping_mul(Self::PRIME);
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::RoundEngine;
    use crate::types::Mode;

    #[test]
    fn fingerprint_is_deterministic() {
        let mut a = RoundEngine::new(77);
        let mut b = RoundEngine::new(77);
        a.start_session(Mode::Medium);
        b.start_session(Mode::Medium);

        assert_eq!(a.snapshot().fingerprint(), b.snapshot().fingerprint());
    }

    #[test]
    fn fingerprint_changes_on_tick() {
        let mut engine = RoundEngine::new(77);
        engine.start_session(Mode::Easy);
        let before = engine.snapshot().fingerprint();
        engine.tick();
        assert_ne!(before, engine.snapshot().fingerprint());
    }

    #[test]
    fn playable_only_while_active() {
        let mut engine = RoundEngine::new(1);
        assert!(!engine.snapshot().playable());
        engine.start_session(Mode::Hard);
        assert!(engine.snapshot().playable());
    }
}
