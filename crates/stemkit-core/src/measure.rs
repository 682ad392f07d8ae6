// The measure of a word and the predicates built on it.
//
// Any word can be written as [C](VC){m}[V], where C is a run of consonants
// and V a run of vowels. `m` is the measure: the number of vowel runs that
// are followed by a consonant run.

use crate::character::{LetterClass, classes, is_consonant};

/// Encode `word` as a string of `c` and `v`, one symbol per position.
pub fn encode(word: &[u8]) -> String {
    classes(word).map(LetterClass::symbol).collect()
}

/// Count the vowel-to-consonant transitions in `word`.
///
/// Equal to the number of `"vc"` occurrences in [`encode`]`(word)`, computed
/// in one pass without building the encoding.
pub fn measure(word: &[u8]) -> usize {
    let mut count = 0;
    let mut prev = LetterClass::Consonant;
    for class in classes(word) {
        if prev == LetterClass::Vowel && class == LetterClass::Consonant {
            count += 1;
        }
        prev = class;
    }
    count
}

/// `m > 0`
pub fn has_positive_measure(word: &[u8]) -> bool {
    measure(word) > 0
}

/// `m > 1`
pub fn has_gt1_measure(word: &[u8]) -> bool {
    measure(word) > 1
}

/// Whether any position of `word` is classified as a vowel.
pub fn contains_vowel(word: &[u8]) -> bool {
    classes(word).any(|class| class == LetterClass::Vowel)
}

/// Whether `word` ends with two identical letters, the last a consonant
/// ("hopp", "fizz", "fall").
pub fn ends_double_consonant(word: &[u8]) -> bool {
    let len = word.len();
    len >= 2 && word[len - 1] == word[len - 2] && is_consonant(word, len - 1)
}

/// Whether `word` ends consonant-vowel-consonant, where the final
/// consonant is not `w`, `x` or `y` ("hop", "fil", but not "snow").
///
/// A two-letter word ending vowel-consonant ("at", "on") also qualifies.
pub fn ends_cvc(word: &[u8]) -> bool {
    let len = word.len();
    if len == 2 {
        return !is_consonant(word, 0) && is_consonant(word, 1);
    }
    len >= 3
        && is_consonant(word, len - 3)
        && !is_consonant(word, len - 2)
        && is_consonant(word, len - 1)
        && !matches!(word[len - 1], b'w' | b'x' | b'y')
}
