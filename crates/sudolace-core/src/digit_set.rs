//! A set of candidate digits for a single cell.
//!
//! This module provides [`DigitSet`], a bitset over the digits 1-9 stored in
//! a single `u16`. Bits 0-8 represent digits 1-9 respectively.
//!
//! # Examples
//!
//! ```
//! use sudolace_core::{Digit, DigitSet};
//!
//! let mut set = DigitSet::EMPTY;
//! set.insert(Digit::D1);
//! set.insert(Digit::D5);
//! set.insert(Digit::D9);
//!
//! assert_eq!(set.len(), 3);
//! assert!(set.contains(Digit::D5));
//! ```

use std::{
    fmt,
    iter::FusedIterator,
    ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, Not},
};

use crate::Digit;

/// A set of digits 1-9, represented as a bitset.
///
/// Provides constant-time membership tests and set algebra, which the
/// deduction techniques lean on heavily.
///
/// # Set Operations
///
/// ```
/// use sudolace_core::{Digit, DigitSet};
///
/// let a = DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3]);
/// let b = DigitSet::from_iter([Digit::D2, Digit::D3, Digit::D4]);
///
/// assert_eq!(a | b, DigitSet::from_iter([Digit::D1, Digit::D2, Digit::D3, Digit::D4]));
/// assert_eq!(a & b, DigitSet::from_iter([Digit::D2, Digit::D3]));
/// assert_eq!(a.difference(b), DigitSet::from_elem(Digit::D1));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct DigitSet(u16);

impl DigitSet {
    const MASK: u16 = 0x1ff;

    /// The empty set.
    pub const EMPTY: Self = Self(0);

    /// The set containing all nine digits.
    pub const FULL: Self = Self(Self::MASK);

    /// Creates a set containing a single digit.
    #[must_use]
    pub const fn from_elem(digit: Digit) -> Self {
        Self(1 << (digit.value() - 1))
    }

    /// Inserts a digit into the set.
    pub const fn insert(&mut self, digit: Digit) {
        self.0 |= 1 << (digit.value() - 1);
    }

    /// Removes a digit from the set.
    pub const fn remove(&mut self, digit: Digit) {
        self.0 &= !(1 << (digit.value() - 1));
    }

    /// Returns `true` if the set contains `digit`.
    #[must_use]
    pub const fn contains(self, digit: Digit) -> bool {
        self.0 & (1 << (digit.value() - 1)) != 0
    }

    /// Returns the number of digits in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns `true` if the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Returns the sole element if the set has exactly one, `None` otherwise.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudolace_core::{Digit, DigitSet};
    ///
    /// assert_eq!(DigitSet::from_elem(Digit::D4).as_single(), Some(Digit::D4));
    /// assert_eq!(DigitSet::FULL.as_single(), None);
    /// assert_eq!(DigitSet::EMPTY.as_single(), None);
    /// ```
    #[must_use]
    pub fn as_single(self) -> Option<Digit> {
        if self.0.count_ones() != 1 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.0.trailing_zeros() as u8 + 1;
        Digit::from_value(value)
    }

    /// Returns the union of `self` and `other`.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Returns the intersection of `self` and `other`.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Returns the digits in `self` that are not in `other`.
    #[must_use]
    pub const fn difference(self, other: Self) -> Self {
        Self(self.0 & !other.0)
    }

    /// Returns the raw bit representation (bits 0-8 map to digits 1-9).
    ///
    /// Used at the snapshot boundary where candidate sets are stored as
    /// integers.
    #[must_use]
    pub const fn bits(self) -> u16 {
        self.0
    }

    /// Reconstructs a set from raw bits, rejecting bits outside the digit range.
    ///
    /// # Examples
    ///
    /// ```
    /// use sudolace_core::DigitSet;
    ///
    /// let set = DigitSet::try_from_bits(0b1_0000_0001).unwrap();
    /// assert_eq!(set.len(), 2);
    /// assert!(DigitSet::try_from_bits(0b10_0000_0000).is_none());
    /// ```
    #[must_use]
    pub const fn try_from_bits(bits: u16) -> Option<Self> {
        if bits & !Self::MASK == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// Returns an iterator over the digits in ascending order.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { bits: self.0 }
    }
}

impl FromIterator<Digit> for DigitSet {
    fn from_iter<I: IntoIterator<Item = Digit>>(iter: I) -> Self {
        let mut set = Self::EMPTY;
        for digit in iter {
            set.insert(digit);
        }
        set
    }
}

impl IntoIterator for DigitSet {
    type Item = Digit;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl BitOr for DigitSet {
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        self.union(rhs)
    }
}

impl BitOrAssign for DigitSet {
    fn bitor_assign(&mut self, rhs: Self) {
        *self = self.union(rhs);
    }
}

impl BitAnd for DigitSet {
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        self.intersection(rhs)
    }
}

impl BitAndAssign for DigitSet {
    fn bitand_assign(&mut self, rhs: Self) {
        *self = self.intersection(rhs);
    }
}

impl Not for DigitSet {
    type Output = Self;
    fn not(self) -> Self {
        Self(!self.0 & Self::MASK)
    }
}

impl fmt::Display for DigitSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        let mut first = true;
        for digit in self.iter() {
            if !first {
                write!(f, ",")?;
            }
            write!(f, "{digit}")?;
            first = false;
        }
        write!(f, "}}")
    }
}

/// Iterator over the digits of a [`DigitSet`] in ascending order.
#[derive(Debug, Clone)]
pub struct Iter {
    bits: u16,
}

impl Iterator for Iter {
    type Item = Digit;

    fn next(&mut self) -> Option<Digit> {
        if self.bits == 0 {
            return None;
        }
        #[expect(clippy::cast_possible_truncation)]
        let value = self.bits.trailing_zeros() as u8 + 1;
        self.bits &= self.bits - 1;
        Digit::from_value(value)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let len = self.bits.count_ones() as usize;
        (len, Some(len))
    }
}

impl FusedIterator for Iter {}
impl ExactSizeIterator for Iter {}
