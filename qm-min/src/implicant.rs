// Copyright (c) The qm-min Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

use arrayvec::ArrayVec;
use itertools::Itertools;
use std::{cmp::Ordering, fmt};

/// The maximum number of variables a pattern can hold.
pub const MAX_VARIABLES: usize = 32;

/// A ternary bit pattern over `{0, 1, -}`.
///
/// Position 0 is the most significant bit of the values the pattern covers. `None` marks a
/// don't-care position, i.e. one that was eliminated by combining its `0` and `1` variants.
///
/// Patterns are ordered the way their textual forms are: `-` sorts before `0`, which sorts
/// before `1`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Pattern {
    input: ArrayVec<Option<bool>, MAX_VARIABLES>,
}

impl Pattern {
    /// Returns the fixed-width binary pattern for `value`, zero-padded to `variable_count`
    /// positions.
    ///
    /// Bits above `variable_count` are ignored; callers are expected to have range-checked
    /// `value`.
    pub fn from_value(value: u32, variable_count: usize) -> Self {
        assert!(
            variable_count <= MAX_VARIABLES,
            "variable count {} must be at most {}",
            variable_count,
            MAX_VARIABLES
        );
        let input = (0..variable_count)
            .rev()
            .map(|bit| Some((value >> bit) & 1 == 1))
            .collect();
        Self { input }
    }

    /// Builds a pattern out of its positions. Returns `None` if there are too many of them.
    pub fn from_input(input: impl IntoIterator<Item = Option<bool>>) -> Option<Self> {
        let mut out = ArrayVec::new();
        for elem in input {
            out.try_push(elem).ok()?;
        }
        Some(Self { input: out })
    }

    #[inline]
    pub fn input(&self) -> &[Option<bool>] {
        &self.input
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.input.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.input.is_empty()
    }

    /// The number of positions that are not don't-cares.
    pub fn literal_count(&self) -> usize {
        self.input.iter().filter(|c| c.is_some()).count()
    }

    /// The number of `1` positions.
    pub fn ones(&self) -> usize {
        self.input.iter().filter(|&&c| c == Some(true)).count()
    }

    /// Returns true if every position is a don't-care.
    pub fn is_universe(&self) -> bool {
        self.input.iter().all(|c| c.is_none())
    }

    /// Returns true if `value` (read with the same width as this pattern) matches every fixed
    /// position.
    pub fn evaluate(&self, value: u32) -> bool {
        let width = self.len();
        self.input
            .iter()
            .enumerate()
            .all(|(ix, c)| match c {
                Some(bit) => ((value >> (width - 1 - ix)) & 1 == 1) == *bit,
                None => true,
            })
    }

    /// Merges two patterns that differ in exactly one position, replacing that position with a
    /// don't-care.
    ///
    /// Returns `None` if the patterns are identical or differ in more than one position.
    pub fn merge_adjacent(&self, other: &Self) -> Option<Self> {
        debug_assert_eq!(self.len(), other.len(), "patterns must have the same length");

        let mut diff = 0;
        let mut input = ArrayVec::new();
        for (&c, &d) in self.input.iter().zip(&other.input) {
            if c == d {
                input.push(c);
            } else {
                diff += 1;
                if diff > 1 {
                    return None;
                }
                input.push(None);
            }
        }

        (diff == 1).then(|| Self { input })
    }

    #[inline]
    pub fn matrix_display(&self) -> PatternMatrixDisplay<'_> {
        PatternMatrixDisplay::new(self)
    }
}

impl fmt::Display for Pattern {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.matrix_display())
    }
}

/// A (possibly generalized) product term: the on-set values it covers plus its pattern.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Implicant {
    // Always sorted.
    covered: Vec<u32>,
    pattern: Pattern,
}

impl Implicant {
    /// Creates the implicant for a single on-set value.
    pub fn minterm(value: u32, variable_count: usize) -> Self {
        Self {
            covered: vec![value],
            pattern: Pattern::from_value(value, variable_count),
        }
    }

    /// Creates an implicant out of its parts. `covered` is sorted.
    pub fn new(covered: impl IntoIterator<Item = u32>, pattern: Pattern) -> Self {
        let mut covered: Vec<_> = covered.into_iter().collect();
        covered.sort_unstable();
        Self { covered, pattern }
    }

    /// The on-set values this implicant covers, in ascending order.
    #[inline]
    pub fn covered(&self) -> &[u32] {
        &self.covered
    }

    #[inline]
    pub fn pattern(&self) -> &Pattern {
        &self.pattern
    }

    #[inline]
    pub fn covers(&self, value: u32) -> bool {
        self.covered.binary_search(&value).is_ok()
    }

    /// Attempts to combine `self` with `other`.
    ///
    /// Succeeds only if the two patterns differ in exactly one position and the covered sets
    /// differ. The result covers the values of both operands.
    ///
    /// This does not track whether either operand was consumed: that is up to the caller.
    pub fn combine(&self, other: &Implicant) -> Option<Implicant> {
        if self.pattern == other.pattern || self.covered == other.covered {
            return None;
        }
        let pattern = self.pattern.merge_adjacent(&other.pattern)?;

        let mut covered = Vec::with_capacity(self.covered.len() + other.covered.len());
        covered.extend_from_slice(&self.covered);
        covered.extend_from_slice(&other.covered);
        covered.sort_unstable();

        Some(Self { covered, pattern })
    }
}

/// Implicants are ordered by the number of values they cover, then by the covered values,
/// then by pattern.
impl Ord for Implicant {
    fn cmp(&self, other: &Self) -> Ordering {
        self.covered
            .len()
            .cmp(&other.covered.len())
            .then_with(|| self.covered.cmp(&other.covered))
            .then_with(|| self.pattern.cmp(&other.pattern))
    }
}

impl PartialOrd for Implicant {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Implicant {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "m({}) = {}",
            self.covered.iter().format(", "),
            self.pattern
        )
    }
}

pub struct PatternMatrixDisplay<'a> {
    pattern: &'a Pattern,
    format: MatrixDisplayFormat,
}

impl<'a> PatternMatrixDisplay<'a> {
    pub fn new(pattern: &'a Pattern) -> Self {
        Self {
            pattern,
            format: MatrixDisplayFormat::default(),
        }
    }

    pub fn with_format(mut self, format: MatrixDisplayFormat) -> Self {
        self.format = format;
        self
    }
}

impl<'a> fmt::Display for PatternMatrixDisplay<'a> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        for &input in self.pattern.input() {
            write!(f, "{}", self.format.char_for_input(input))?;
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug)]
pub enum MatrixDisplayFormat {
    /// Display a pattern as `10-1`, with dashes representing don't-care positions.
    Dashes,

    /// Display a pattern as `1021`, with `2` representing don't-care positions.
    Numeric,
}

impl MatrixDisplayFormat {
    /// Returns the character that would be displayed for a position.
    pub fn char_for_input(self, input: Option<bool>) -> char {
        match input {
            Some(true) => '1',
            Some(false) => '0',
            None => match self {
                Self::Dashes => '-',
                Self::Numeric => '2',
            },
        }
    }
}

impl Default for MatrixDisplayFormat {
    fn default() -> Self {
        Self::Dashes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn implicant(covered: &[u32], pattern: &str) -> Implicant {
        let input = pattern.chars().map(|ch| match ch {
            '0' => Some(false),
            '1' => Some(true),
            '-' => None,
            other => panic!("invalid pattern char {:?}", other),
        });
        Implicant::new(covered.iter().copied(), Pattern::from_input(input).unwrap())
    }

    #[test]
    fn test_from_value() {
        assert_eq!(Pattern::from_value(5, 4).to_string(), "0101");
        assert_eq!(Pattern::from_value(0, 3).to_string(), "000");
        assert_eq!(Pattern::from_value(7, 3).ones(), 3);
        assert!(Pattern::from_value(0, 0).is_empty());
    }

    #[test]
    fn test_combine() {
        let a = Implicant::minterm(0, 2);
        let b = Implicant::minterm(1, 2);
        let c = Implicant::minterm(3, 2);

        let ab = a.combine(&b).expect("00 and 01 differ in one bit");
        assert_eq!(ab, implicant(&[0, 1], "0-"));

        assert_eq!(a.combine(&c), None, "00 and 11 differ in two bits");
        assert_eq!(a.combine(&a), None, "identical patterns");

        // Covered values are kept sorted regardless of operand order.
        let ba = b.combine(&a).unwrap();
        assert_eq!(ba.covered(), &[0, 1]);
        assert_eq!(ab, ba);
    }

    #[test]
    fn test_combine_same_covered() {
        let a = implicant(&[0, 1], "0-");
        let b = implicant(&[0, 1], "1-");
        assert_eq!(a.combine(&b), None, "identical covered sets never combine");
    }

    #[test]
    fn test_evaluate() {
        let imp = implicant(&[1, 5], "-01");
        assert!(imp.pattern().evaluate(1));
        assert!(imp.pattern().evaluate(5));
        assert!(!imp.pattern().evaluate(3));
        assert_eq!(imp.pattern().literal_count(), 2);
    }

    #[test]
    fn test_ordering() {
        let single = implicant(&[7], "111");
        let pair_low = implicant(&[0, 1], "00-");
        let pair_high = implicant(&[0, 2], "0-0");
        assert!(single < pair_low, "fewer covered values sort first");
        assert!(pair_low < pair_high, "then by covered values");

        let dash = implicant(&[0, 1], "-00");
        let zero = implicant(&[0, 1], "000");
        assert!(dash < zero, "then by pattern, with - before 0");
        assert_eq!(pair_high.cmp(&pair_low), Ordering::Greater);
    }

    #[test]
    fn test_display() {
        let imp = implicant(&[2, 0, 8, 10], "-0-0");
        assert_eq!(imp.to_string(), "m(0, 2, 8, 10) = -0-0");
        assert_eq!(
            imp.pattern()
                .matrix_display()
                .with_format(MatrixDisplayFormat::Numeric)
                .to_string(),
            "2020"
        );
    }

    fn arb_implicant() -> impl Strategy<Value = Implicant> {
        (
            prop::collection::vec(0_u32..8, 1..4),
            prop::collection::vec(any::<Option<bool>>(), 3),
        )
            .prop_map(|(covered, input)| {
                Implicant::new(covered, Pattern::from_input(input).unwrap())
            })
    }

    proptest! {
        #[test]
        fn proptest_order_antisymmetric(a in arb_implicant(), b in arb_implicant()) {
            prop_assert_eq!(a.cmp(&b), b.cmp(&a).reverse());
            prop_assert_eq!(a.cmp(&b) == Ordering::Equal, a == b);
        }

        #[test]
        fn proptest_order_transitive(
            a in arb_implicant(),
            b in arb_implicant(),
            c in arb_implicant(),
        ) {
            if a <= b && b <= c {
                prop_assert!(a <= c);
            }
            if a >= b && b >= c {
                prop_assert!(a >= c);
            }
        }

        #[test]
        fn proptest_combine_symmetric(a in 0_u32..16, b in 0_u32..16) {
            let a = Implicant::minterm(a, 4);
            let b = Implicant::minterm(b, 4);
            let ab = a.combine(&b);
            prop_assert_eq!(&ab, &b.combine(&a));
            if let Some(ab) = ab {
                prop_assert_eq!((a.covered()[0] ^ b.covered()[0]).count_ones(), 1);
                prop_assert_eq!(ab.pattern().literal_count(), 3);
            }
        }
    }
}
