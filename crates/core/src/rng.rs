//! RNG module - injectable random sources for round generation
//!
//! Round generation only ever asks for "a value in `[0, max)`", so the engine is
//! generic over [`RandomSource`]. Two implementations ship with the crate:
//!
//! - [`SimpleRng`]: seeded LCG used for real play and reproducible games
//! - [`ScriptedRng`]: replays a fixed sequence of draws, for tests that assert
//!   exact operands, operators and offsets

/// Source of uniformly distributed integers.
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits of the raw draw (multiply-shift) since the low bits of
    /// an LCG cycle with a short period.
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Fair coin flip
    fn next_bool(&mut self) -> bool {
        self.next_range(2) == 1
    }
}

impl<R: RandomSource + ?Sized> RandomSource for &mut R {
    fn next_u32(&mut self) -> u32 {
        (**self).next_u32()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        (**self).next_range(max)
    }

    fn next_bool(&mut self) -> bool {
        (**self).next_bool()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Seed derived from the wall clock (sub-second nanos mixed with seconds)
    pub fn seed_from_clock() -> u32 {
        let now = chrono::Utc::now();
        (now.timestamp() as u32) ^ now.timestamp_subsec_nanos().rotate_left(13)
    }

    /// Current internal state (restarting from it replays the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed sequence of range draws.
///
/// Each call to [`RandomSource::next_range`] returns the next scripted value
/// reduced modulo `max`, so scripts are written in terms of the drawn value
/// itself (`0` for the first operand means operand `1`). The script wraps
/// around when exhausted.
#[derive(Debug, Clone)]
pub struct ScriptedRng {
    values: Vec<u32>,
    pos: usize,
}

impl ScriptedRng {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        Self {
            values: values.into(),
            pos: 0,
        }
    }

    /// Number of draws consumed so far
    pub fn consumed(&self) -> usize {
        self.pos
    }

    fn next_value(&mut self) -> u32 {
        if self.values.is_empty() {
            return 0;
        }
        let v = self.values[self.pos % self.values.len()];
        self.pos += 1;
        v
    }
}

impl RandomSource for ScriptedRng {
    fn next_u32(&mut self) -> u32 {
        self.next_value()
    }

    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_value() % max
    }
}
