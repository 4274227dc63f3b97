//! Countdown ticker - turns measured frame time into whole one-second ticks.
//!
//! The ticker does not own a thread or timer. The main loop feeds it elapsed
//! milliseconds and calls [`RoundEngine::tick`](crate::RoundEngine::tick) once for
//! every tick it reports. It is keyed by the engine's current round id:
//!
//! - a new round id re-arms the ticker and drops any partial second
//! - `None` (inactive session) disarms it
//!
//! so there is never more than one countdown running for the session.

use crate::types::TICK_MS;

#[derive(Debug, Clone)]
pub struct CountdownTicker {
    period_ms: u32,
    accumulated_ms: u32,
    armed_for: Option<u32>,
}

impl CountdownTicker {
    pub fn new() -> Self {
        Self::with_period(TICK_MS)
    }

    pub fn with_period(period_ms: u32) -> Self {
        Self {
            period_ms: period_ms.max(1),
            accumulated_ms: 0,
            armed_for: None,
        }
    }

    /// Align the ticker with the engine's current round.
    ///
    /// Returns true when the ticker was (re)armed or disarmed.
    pub fn sync(&mut self, round_id: Option<u32>) -> bool {
        if self.armed_for == round_id {
            return false;
        }
        self.armed_for = round_id;
        self.accumulated_ms = 0;
        true
    }

    /// Cancel the running countdown.
    pub fn disarm(&mut self) {
        self.sync(None);
    }

    pub fn is_armed(&self) -> bool {
        self.armed_for.is_some()
    }

    pub fn armed_for(&self) -> Option<u32> {
        self.armed_for
    }

    /// Milliseconds until the next tick fires (None while disarmed).
    pub fn until_next_ms(&self) -> Option<u32> {
        self.armed_for
            .map(|_| self.period_ms.saturating_sub(self.accumulated_ms))
    }

    /// Advance by `elapsed_ms` and return the number of ticks that became due.
    pub fn advance(&mut self, elapsed_ms: u32) -> u32 {
        if self.armed_for.is_none() {
            return 0;
        }
        self.accumulated_ms = self.accumulated_ms.saturating_add(elapsed_ms);
        let due = self.accumulated_ms / self.period_ms;
        self.accumulated_ms %= self.period_ms;
        due
    }
}

impl Default for CountdownTicker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disarmed_ticker_never_fires() {
        let mut ticker = CountdownTicker::new();
        assert!(!ticker.is_armed());
        assert_eq!(ticker.advance(5000), 0);
        assert_eq!(ticker.until_next_ms(), None);
    }

    #[test]
    fn test_fires_once_per_period() {
        let mut ticker = CountdownTicker::new();
        assert!(ticker.sync(Some(1)));

        assert_eq!(ticker.advance(400), 0);
        assert_eq!(ticker.until_next_ms(), Some(600));
        assert_eq!(ticker.advance(600), 1);
        assert_eq!(ticker.advance(2500), 2);
        assert_eq!(ticker.until_next_ms(), Some(500));
    }

    #[test]
    fn test_sync_same_round_keeps_progress() {
        let mut ticker = CountdownTicker::new();
        ticker.sync(Some(3));
        ticker.advance(900);
        assert!(!ticker.sync(Some(3)));
        assert_eq!(ticker.advance(100), 1);
    }

    #[test]
    fn test_new_round_rearms_and_drops_partial_second() {
        let mut ticker = CountdownTicker::new();
        ticker.sync(Some(1));
        ticker.advance(900);

        assert!(ticker.sync(Some(2)));
        assert_eq!(ticker.armed_for(), Some(2));
        assert_eq!(ticker.advance(100), 0);
        assert_eq!(ticker.advance(900), 1);
    }

    #[test]
    fn test_disarm_cancels_countdown() {
        let mut ticker = CountdownTicker::new();
        ticker.sync(Some(1));
        ticker.advance(999);
        ticker.disarm();

        assert!(!ticker.is_armed());
        assert_eq!(ticker.advance(1), 0);

        // Re-arming for the same round id starts from zero.
        ticker.sync(Some(1));
        assert_eq!(ticker.advance(1), 0);
    }

    #[test]
    fn test_zero_period_is_clamped() {
        let mut ticker = CountdownTicker::with_period(0);
        ticker.sync(Some(1));
        assert_eq!(ticker.advance(3), 3);
    }
}
