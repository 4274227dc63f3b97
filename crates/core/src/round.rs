//! Round module - one generated arithmetic statement
//!
//! A round is drawn from the injected [`RandomSource`] in a fixed order:
//!
//! 1. operand A in `[1, 2 * level]`
//! 2. operand B in `[1, 2 * level]`
//! 3. operator (add or subtract, forced to add when A < B)
//! 4. correctness coin
//! 5. upward offset in `[1, 3]` (only drawn for incorrect statements)

use std::fmt;

use crate::rng::RandomSource;
use crate::types::{Operator, MAX_WRONG_OFFSET, OPERAND_SCALE};

/// A statement presented for judgment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Round {
    pub operand_a: u32,
    pub operand_b: u32,
    pub operator: Operator,
    pub true_result: u32,
    pub displayed_result: u32,
    pub is_actually_correct: bool,
}

impl Round {
    /// Generate a round for the given level.
    ///
    /// Levels below 1 are treated as level 1.
    pub fn generate<R: RandomSource>(level: u32, rng: &mut R) -> Self {
        let bound = operand_bound(level);
        let operand_a = rng.next_range(bound) + 1;
        let operand_b = rng.next_range(bound) + 1;

        let mut operator = if rng.next_range(2) == 0 {
            Operator::Add
        } else {
            Operator::Subtract
        };
        if operator == Operator::Subtract && operand_a < operand_b {
            operator = Operator::Add;
        }

        let true_result = operator.apply(operand_a, operand_b);
        let is_actually_correct = rng.next_range(2) == 0;
        let displayed_result = if is_actually_correct {
            true_result
        } else {
            true_result + rng.next_range(MAX_WRONG_OFFSET) + 1
        };

        Self {
            operand_a,
            operand_b,
            operator,
            true_result,
            displayed_result,
            is_actually_correct,
        }
    }

    /// Rendered statement, e.g. `"7 - 3 = 4"`.
    pub fn expression(&self) -> String {
        self.to_string()
    }

    /// Whether a player's guess matches the ground truth.
    pub fn accepts(&self, guess: bool) -> bool {
        guess == self.is_actually_correct
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} = {}",
            self.operand_a,
            self.operator.symbol(),
            self.operand_b,
            self.displayed_result
        )
    }
}

/// Inclusive upper bound for operands at `level`.
pub fn operand_bound(level: u32) -> u32 {
    OPERAND_SCALE.saturating_mul(level.max(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::{ScriptedRng, SimpleRng};

    #[test]
    fn test_operand_bound() {
        assert_eq!(operand_bound(1), 2);
        assert_eq!(operand_bound(5), 10);
        assert_eq!(operand_bound(0), 2);
    }

    #[test]
    fn test_scripted_correct_addition() {
        // A=2 (draw 1), B=1 (draw 0), add (0), correct (0)
        let mut rng = ScriptedRng::new(vec![1, 0, 0, 0]);
        let round = Round::generate(1, &mut rng);

        assert_eq!(round.operand_a, 2);
        assert_eq!(round.operand_b, 1);
        assert_eq!(round.operator, Operator::Add);
        assert_eq!(round.true_result, 3);
        assert_eq!(round.displayed_result, 3);
        assert!(round.is_actually_correct);
        assert_eq!(round.expression(), "2 + 1 = 3");
        // Correct rounds never draw an offset
        assert_eq!(rng.consumed(), 4);
    }

    #[test]
    fn test_scripted_incorrect_subtraction() {
        // level 3 => bound 6. A=6 (5), B=2 (1), subtract (1), incorrect (1), offset 2 (1)
        let mut rng = ScriptedRng::new(vec![5, 1, 1, 1, 1]);
        let round = Round::generate(3, &mut rng);

        assert_eq!(round.operator, Operator::Subtract);
        assert_eq!(round.true_result, 4);
        assert_eq!(round.displayed_result, 6);
        assert!(!round.is_actually_correct);
        assert_eq!(round.to_string(), "6 - 2 = 6");
        assert_eq!(rng.consumed(), 5);
    }

    #[test]
    fn test_subtraction_forced_to_addition_when_negative() {
        // A=1 (0), B=2 (1), subtract requested (1), correct (0)
        let mut rng = ScriptedRng::new(vec![0, 1, 1, 0]);
        let round = Round::generate(1, &mut rng);

        assert_eq!(round.operator, Operator::Add);
        assert_eq!(round.true_result, 3);
    }

    #[test]
    fn test_equal_operands_may_subtract() {
        let mut rng = ScriptedRng::new(vec![1, 1, 1, 0]);
        let round = Round::generate(1, &mut rng);

        assert_eq!(round.operator, Operator::Subtract);
        assert_eq!(round.true_result, 0);
        assert_eq!(round.expression(), "2 - 2 = 0");
    }

    #[test]
    fn test_generated_rounds_hold_invariants() {
        let mut rng = SimpleRng::new(2024);
        for level in 1..40 {
            for _ in 0..50 {
                let round = Round::generate(level, &mut rng);
                let bound = operand_bound(level);

                assert!((1..=bound).contains(&round.operand_a));
                assert!((1..=bound).contains(&round.operand_b));
                if round.operator == Operator::Subtract {
                    assert!(round.operand_a >= round.operand_b);
                }
                if round.is_actually_correct {
                    assert_eq!(round.displayed_result, round.true_result);
                } else {
                    let offset = round.displayed_result - round.true_result;
                    assert!((1..=MAX_WRONG_OFFSET).contains(&offset));
                }
            }
        }
    }

    #[test]
    fn test_accepts() {
        let mut rng = ScriptedRng::new(vec![0, 0, 0, 1, 2]);
        let round = Round::generate(1, &mut rng);
        assert!(!round.is_actually_correct);
        assert!(round.accepts(false));
        assert!(!round.accepts(true));
    }
}
