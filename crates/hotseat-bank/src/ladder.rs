//! The prize ladder: ascending prize values and the safe rung.

use serde::{Deserialize, Serialize};

use crate::BankError;

/// The ordered tower of prizes, index 0 = lowest rung.
///
/// The `safe_index` marks the guaranteed-minimum-payout threshold: once a
/// player has climbed to that rung, a wrong answer can no longer drop
/// them below its value. Losing before reaching it forfeits everything.
///
/// Instances are validated at construction and never change afterwards,
/// so the ladder can be shared across all sessions without locking.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PrizeLadder {
    values: Vec<u64>,
    safe_index: usize,
}

impl PrizeLadder {
    /// Builds a ladder from ascending prize values and a safe rung.
    ///
    /// # Errors
    /// - [`BankError::EmptyLadder`] — no rungs at all
    /// - [`BankError::LadderNotAscending`] — values not strictly increasing
    /// - [`BankError::SafeIndexOutOfRange`] — safe rung past the top
    pub fn new(values: Vec<u64>, safe_index: usize) -> Result<Self, BankError> {
        if values.is_empty() {
            return Err(BankError::EmptyLadder);
        }
        if values.windows(2).any(|pair| pair[0] >= pair[1]) {
            return Err(BankError::LadderNotAscending);
        }
        if safe_index >= values.len() {
            return Err(BankError::SafeIndexOutOfRange {
                safe: safe_index,
                len: values.len(),
            });
        }
        Ok(Self { values, safe_index })
    }

    /// Number of rungs.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Always `false` — `new` rejects empty ladders — but provided for
    /// symmetry with `len`, per convention.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// The prize at a given rung. Callers pass indices that came from the
    /// ladder itself (levels, the safe rung), so this indexes directly.
    pub fn value(&self, level: usize) -> u64 {
        self.values[level]
    }

    /// The top prize — what a full climb pays.
    pub fn top(&self) -> u64 {
        *self.values.last().expect("ladder is never empty")
    }

    /// The guaranteed-minimum-payout rung.
    pub fn safe_index(&self) -> usize {
        self.safe_index
    }

    /// The prize banked at the safe rung.
    pub fn safe_value(&self) -> u64 {
        self.values[self.safe_index]
    }
}

/// The classic 15-rung tower: €50 up to the million, with the safe rung
/// at level 5 (index 4, €1 000).
impl Default for PrizeLadder {
    fn default() -> Self {
        Self {
            values: vec![
                50, 100, 250, 500, 1_000, 2_000, 5_000, 10_000, 15_000,
                25_000, 50_000, 100_000, 250_000, 500_000, 1_000_000,
            ],
            safe_index: 4,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_valid_ladder_succeeds() {
        let ladder = PrizeLadder::new(vec![50, 100, 250], 1).expect("valid");
        assert_eq!(ladder.len(), 3);
        assert_eq!(ladder.value(0), 50);
        assert_eq!(ladder.top(), 250);
        assert_eq!(ladder.safe_index(), 1);
        assert_eq!(ladder.safe_value(), 100);
    }

    #[test]
    fn test_new_empty_ladder_rejected() {
        assert!(matches!(
            PrizeLadder::new(vec![], 0),
            Err(BankError::EmptyLadder)
        ));
    }

    #[test]
    fn test_new_non_ascending_rejected() {
        assert!(matches!(
            PrizeLadder::new(vec![50, 50, 100], 0),
            Err(BankError::LadderNotAscending)
        ));
        assert!(matches!(
            PrizeLadder::new(vec![100, 50], 0),
            Err(BankError::LadderNotAscending)
        ));
    }

    #[test]
    fn test_new_safe_index_past_top_rejected() {
        assert!(matches!(
            PrizeLadder::new(vec![50, 100], 2),
            Err(BankError::SafeIndexOutOfRange { safe: 2, len: 2 })
        ));
    }

    #[test]
    fn test_default_is_classic_fifteen_rung_tower() {
        let ladder = PrizeLadder::default();
        assert_eq!(ladder.len(), 15);
        assert_eq!(ladder.value(0), 50);
        assert_eq!(ladder.top(), 1_000_000);
        assert_eq!(ladder.safe_index(), 4);
        assert_eq!(ladder.safe_value(), 1_000);
    }
}
