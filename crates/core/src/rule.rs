//! Elementary cellular automaton rules and their compiled lookup tables.
//!
//! A [`Rule`] is an index in [0, 255]. Its binary expansion, most-significant
//! bit first, gives the output for each neighborhood in [`PATTERNS`] order.
//! [`RuleTable`] stores those outputs indexed by the 3-bit neighborhood value
//! `(left << 2) | (center << 1) | right`, so bit `n` of the rule index is the
//! output for neighborhood `n`.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::GridError;

/// Neighborhood patterns in rule-bit order (most-significant bit first).
pub const PATTERNS: [&str; 8] = ["111", "110", "101", "100", "011", "010", "001", "000"];

/// Largest valid rule index.
pub const MAX_RULE: u32 = 255;

/// An elementary cellular automaton rule index in [0, 255].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Rule(u8);

impl Rule {
    /// Validates a rule index.
    ///
    /// Returns `GridError::InvalidRuleIndex` for anything above 255. The index
    /// is never clamped.
    pub fn new(index: u32) -> Result<Self, GridError> {
        u8::try_from(index)
            .map(Rule)
            .map_err(|_| GridError::InvalidRuleIndex(index))
    }

    /// The rule index.
    pub fn index(self) -> u8 {
        self.0
    }

    /// Compiles this rule into its lookup table.
    pub fn table(self) -> RuleTable {
        compile_rule(self)
    }

    /// Iterates over all 256 rules in ascending order.
    pub fn all() -> impl Iterator<Item = Rule> {
        (0..=u8::MAX).map(Rule)
    }
}

impl From<u8> for Rule {
    fn from(index: u8) -> Self {
        Rule(index)
    }
}

impl TryFrom<u32> for Rule {
    type Error = GridError;

    fn try_from(index: u32) -> Result<Self, Self::Error> {
        Rule::new(index)
    }
}

impl From<Rule> for u32 {
    fn from(rule: Rule) -> Self {
        u32::from(rule.0)
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Lookup table from 3-cell neighborhood to next cell state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleTable {
    outputs: [bool; 8],
}

impl RuleTable {
    /// Output for the neighborhood `(left, center, right)`.
    #[inline]
    pub fn lookup(&self, left: bool, center: bool, right: bool) -> bool {
        self.outputs[neighborhood(left, center, right)]
    }

    /// Output for a 3-bit neighborhood value in 0..8.
    ///
    /// # Panics
    ///
    /// Panics if `pattern >= 8`.
    #[inline]
    pub fn output(&self, pattern: usize) -> bool {
        self.outputs[pattern]
    }

    /// The eight `(pattern, output)` bindings in [`PATTERNS`] order.
    pub fn bindings(&self) -> [(&'static str, bool); 8] {
        std::array::from_fn(|i| (PATTERNS[i], self.outputs[7 - i]))
    }

    /// The rule's 8-bit binary expansion, most-significant bit first.
    pub fn bits(&self) -> String {
        self.bindings()
            .iter()
            .map(|&(_, out)| if out { '1' } else { '0' })
            .collect()
    }
}

/// Compiles a rule into its lookup table.
///
/// Bit `i` of the zero-padded binary expansion (counting from the
/// most-significant bit) becomes the output for `PATTERNS[i]`.
pub fn compile_rule(rule: Rule) -> RuleTable {
    let index = rule.index();
    RuleTable {
        outputs: std::array::from_fn(|n| (index >> n) & 1 == 1),
    }
}

#[inline]
fn neighborhood(left: bool, center: bool, right: bool) -> usize {
    (usize::from(left) << 2) | (usize::from(center) << 1) | usize::from(right)
}
