//! A single board cell.

use crate::{Digit, DigitSet};

/// A cell holding either a placed digit or a set of candidate digits.
///
/// The two states are mutually exclusive: assigning a value discards any
/// candidates, and assigning candidates discards the value. A cell never
/// reports both a value and a non-empty candidate set.
///
/// # Examples
///
/// ```
/// use sudolace_core::{Cell, Digit, DigitSet};
///
/// let mut cell = Cell::empty();
/// cell.set_candidates(DigitSet::from_iter([Digit::D1, Digit::D2]));
/// cell.set_value(Some(Digit::D5));
///
/// assert_eq!(cell.value(), Some(Digit::D5));
/// assert!(cell.candidates().is_empty());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    value: Option<Digit>,
    candidates: DigitSet,
}

impl Cell {
    /// Creates an empty cell with no value and no candidates.
    #[must_use]
    pub const fn empty() -> Self {
        Self {
            value: None,
            candidates: DigitSet::EMPTY,
        }
    }

    /// Creates a cell with a placed value.
    #[must_use]
    pub const fn with_value(digit: Digit) -> Self {
        Self {
            value: Some(digit),
            candidates: DigitSet::EMPTY,
        }
    }

    /// Returns the placed value, if any.
    #[must_use]
    pub const fn value(&self) -> Option<Digit> {
        self.value
    }

    /// Returns the candidate set. Always empty for a filled cell.
    #[must_use]
    pub const fn candidates(&self) -> DigitSet {
        self.candidates
    }

    /// Returns `true` if the cell has no placed value.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Places or clears the value. Any candidates are discarded.
    pub const fn set_value(&mut self, value: Option<Digit>) {
        self.value = value;
        self.candidates = DigitSet::EMPTY;
    }

    /// Replaces the candidate set. Any placed value is cleared.
    pub const fn set_candidates(&mut self, candidates: DigitSet) {
        self.value = None;
        self.candidates = candidates;
    }

    /// Removes `digits` from the candidate set. No effect on a filled cell.
    pub const fn remove_candidates(&mut self, digits: DigitSet) {
        self.candidates = self.candidates.difference(digits);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_clears_candidates() {
        let mut cell = Cell::empty();
        cell.set_candidates(DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]));
        cell.set_value(Some(Digit::D7));
        assert_eq!(cell.value(), Some(Digit::D7));
        assert!(cell.candidates().is_empty());
        assert!(!cell.is_empty());
    }

    #[test]
    fn test_candidates_clear_value() {
        let mut cell = Cell::with_value(Digit::D4);
        cell.set_candidates(DigitSet::from_elem(Digit::D8));
        assert_eq!(cell.value(), None);
        assert_eq!(cell.candidates(), DigitSet::from_elem(Digit::D8));
        assert!(cell.is_empty());
    }

    #[test]
    fn test_clearing_value_leaves_empty_candidates() {
        let mut cell = Cell::with_value(Digit::D4);
        cell.set_value(None);
        assert!(cell.is_empty());
        assert!(cell.candidates().is_empty());
    }

    #[test]
    fn test_remove_candidates() {
        let mut cell = Cell::empty();
        cell.set_candidates(DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]));
        cell.remove_candidates(DigitSet::from_iter([Digit::D2, Digit::D9]));
        assert_eq!(
            cell.candidates(),
            DigitSet::from_iter([Digit::D1, Digit::D3])
        );
    }
}
