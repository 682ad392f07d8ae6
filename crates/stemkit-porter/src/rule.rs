// Ordered suffix rules and the matcher that evaluates them.
//
// A rule list is scanned front to back. The first rule whose suffix matches
// decides the outcome: if its condition holds the suffix is replaced,
// otherwise the word is returned untouched. Later rules are never consulted
// once a suffix has matched, so the order of every table is significant.

use std::borrow::Cow;
use std::fmt;

use stemkit_core::measure::{ends_double_consonant, has_gt1_measure, has_positive_measure};

/// What a rule looks for at the end of a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Suffix {
    /// A literal ending. The empty literal matches every word.
    Literal(&'static [u8]),
    /// Two identical trailing consonants ("-tt", "-ss"). The residual stem
    /// is the word without both letters. The two-byte text `*d` is matched
    /// as well, like a literal.
    DoubleConsonant,
}

/// A suffix match under evaluation.
#[derive(Debug, Clone, Copy)]
pub struct Candidate<'w> {
    /// The word the rule list was applied to.
    pub word: &'w [u8],
    /// The word with the matched suffix removed.
    pub stem: &'w [u8],
}

/// Side condition deciding whether a matched rule fires.
#[derive(Clone, Copy)]
pub enum Condition {
    Always,
    /// `m(stem) > 0`
    PositiveMeasure,
    /// `m(stem) > 1`
    MeasureAbove1,
    /// Any other test. It sees the whole word as well as the stem.
    Custom(fn(&Candidate<'_>) -> bool),
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Always => f.write_str("Always"),
            Condition::PositiveMeasure => f.write_str("PositiveMeasure"),
            Condition::MeasureAbove1 => f.write_str("MeasureAbove1"),
            Condition::Custom(_) => f.write_str("Custom(..)"),
        }
    }
}

impl Condition {
    pub fn holds(&self, candidate: &Candidate<'_>) -> bool {
        match self {
            Condition::Always => true,
            Condition::PositiveMeasure => has_positive_measure(candidate.stem),
            Condition::MeasureAbove1 => has_gt1_measure(candidate.stem),
            Condition::Custom(test) => test(candidate),
        }
    }
}

/// A `(suffix, replacement, condition)` triple.
#[derive(Debug, Clone, Copy)]
pub struct Rule<'a> {
    pub suffix: Suffix,
    pub replacement: &'a [u8],
    pub condition: Condition,
}

impl<'a> Rule<'a> {
    /// A rule replacing the literal `suffix` with `replacement`.
    pub const fn new(suffix: &'static str, replacement: &'a str, condition: Condition) -> Self {
        Self {
            suffix: Suffix::Literal(suffix.as_bytes()),
            replacement: replacement.as_bytes(),
            condition,
        }
    }

    /// A rule replacing a trailing double consonant with `replacement`.
    pub const fn double_consonant(replacement: &'a [u8], condition: Condition) -> Self {
        Self {
            suffix: Suffix::DoubleConsonant,
            replacement,
            condition,
        }
    }

    /// The residual stem if this rule's suffix matches `word`.
    pub fn residual<'w>(&self, word: &'w [u8]) -> Option<&'w [u8]> {
        match self.suffix {
            Suffix::DoubleConsonant => {
                if ends_double_consonant(word) {
                    Some(&word[..word.len() - 2])
                } else {
                    word.strip_suffix(b"*d")
                }
            }
            Suffix::Literal(suffix) => word.strip_suffix(suffix),
        }
    }
}

/// Apply the first rule of `rules` whose suffix matches `word`.
///
/// Returns `stem + replacement` when that rule's condition holds and `word`
/// itself when it does not. A failed condition ends the scan: the remaining
/// rules are not tried. If no suffix matches, `word` is returned unchanged.
pub fn apply_rule_list<'w>(word: &'w [u8], rules: &[Rule<'_>]) -> Cow<'w, [u8]> {
    for rule in rules {
        let Some(stem) = rule.residual(word) else {
            continue;
        };

        let candidate = Candidate { word, stem };
        if !rule.condition.holds(&candidate) {
            return Cow::Borrowed(word);
        }

        let mut replaced = Vec::with_capacity(stem.len() + rule.replacement.len());
        replaced.extend_from_slice(stem);
        replaced.extend_from_slice(rule.replacement);
        return Cow::Owned(replaced);
    }

    Cow::Borrowed(word)
}
