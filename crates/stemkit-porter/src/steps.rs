// The eight suffix-stripping steps, applied in the order they appear here.
//
// Every step takes a lowercase word and returns it unchanged (borrowed), as
// a prefix of itself (borrowed), or rewritten (owned).

use std::borrow::Cow;

use stemkit_core::character::is_consonant;
use stemkit_core::measure::{
    contains_vowel, ends_cvc, has_gt1_measure, has_positive_measure, measure,
};

use crate::rule::{Candidate, Condition, Rule, apply_rule_list};

/// A single pipeline step.
pub type Step = for<'w> fn(&'w [u8]) -> Cow<'w, [u8]>;

/// All steps, in application order.
pub static PIPELINE: [Step; 8] = [step1a, step1b, step1c, step2, step3, step4, step5a, step5b];

fn replace_suffix(word: &[u8], suffix_len: usize, replacement: &[u8]) -> Vec<u8> {
    let stem = &word[..word.len() - suffix_len];
    let mut replaced = Vec::with_capacity(stem.len() + replacement.len());
    replaced.extend_from_slice(stem);
    replaced.extend_from_slice(replacement);
    replaced
}

// ---------------------------------------------------------------------------
// Step 1: plurals and past participles
// ---------------------------------------------------------------------------

static STEP1A_RULES: [Rule<'static>; 4] = [
    Rule::new("sses", "ss", Condition::Always),
    Rule::new("ies", "i", Condition::Always),
    Rule::new("ss", "ss", Condition::Always),
    Rule::new("s", "", Condition::Always),
];

/// Plural endings: "caresses" -> "caress", "ponies" -> "poni", "cats" -> "cat".
///
/// A four-letter word ending in "ies" keeps its "ie" ("ties" -> "tie").
pub fn step1a(word: &[u8]) -> Cow<'_, [u8]> {
    if word.len() == 4 && word.ends_with(b"ies") {
        return Cow::Owned(replace_suffix(word, 3, b"ie"));
    }
    apply_rule_list(word, &STEP1A_RULES)
}

/// The trailing double letter of a stem is dropped unless it is l, s or z.
fn may_undouble(candidate: &Candidate<'_>) -> bool {
    !matches!(candidate.word.last(), Some(b'l' | b's' | b'z'))
}

/// A short stem ending consonant-vowel-consonant gets its "e" back.
fn needs_final_e(candidate: &Candidate<'_>) -> bool {
    measure(candidate.stem) == 1 && ends_cvc(candidate.stem)
}

/// Past tense and progressive endings.
///
/// "ied" becomes "ie" on four-letter words and "i" otherwise. "eed" becomes
/// "ee" when what precedes it has a positive measure. "ed" or "ing" is
/// removed when the remainder contains a vowel, after which the remainder is
/// tidied up: "at", "bl" and "iz" regain an "e", a double consonant other
/// than l, s or z loses a letter, and a short CVC stem gains an "e".
pub fn step1b(word: &[u8]) -> Cow<'_, [u8]> {
    if word.ends_with(b"ied") {
        let replacement: &[u8] = if word.len() == 4 { b"ie" } else { b"i" };
        return Cow::Owned(replace_suffix(word, 3, replacement));
    }

    if let Some(stem) = word.strip_suffix(b"eed") {
        return if measure(stem) > 0 {
            Cow::Owned(replace_suffix(word, 3, b"ee"))
        } else {
            Cow::Borrowed(word)
        };
    }

    let suffixes: [&[u8]; 2] = [b"ed", b"ing"];
    let stem = suffixes
        .into_iter()
        .find_map(|suffix| word.strip_suffix(suffix).filter(|stem| contains_vowel(stem)));
    let Some(stem) = stem else {
        return Cow::Borrowed(word);
    };

    // `stem` holds a vowel, so it is not empty.
    let last_letter = &stem[stem.len() - 1..];
    let rules = [
        Rule::new("at", "ate", Condition::Always),
        Rule::new("bl", "ble", Condition::Always),
        Rule::new("iz", "ize", Condition::Always),
        Rule::double_consonant(last_letter, Condition::Custom(may_undouble)),
        Rule::new("", "e", Condition::Custom(needs_final_e)),
    ];
    apply_rule_list(stem, &rules)
}

fn precedes_y_with_consonant(candidate: &Candidate<'_>) -> bool {
    let stem = candidate.stem;
    stem.len() > 1 && is_consonant(stem, stem.len() - 1)
}

static STEP1C_RULES: [Rule<'static>; 1] = [Rule::new(
    "y",
    "i",
    Condition::Custom(precedes_y_with_consonant),
)];

/// Terminal "y" after a consonant becomes "i": "happy" -> "happi", but
/// "say" and "by" are kept.
pub fn step1c(word: &[u8]) -> Cow<'_, [u8]> {
    apply_rule_list(word, &STEP1C_RULES)
}

// ---------------------------------------------------------------------------
// Steps 2-4: derivational suffixes
// ---------------------------------------------------------------------------

/// "logi" is gated on the word minus its last three letters ("-log" kept),
/// not on the residual stem the other rules look at.
fn logi_gate(candidate: &Candidate<'_>) -> bool {
    let word = candidate.word;
    has_positive_measure(&word[..word.len() - 3])
}

static STEP2_RULES: [Rule<'static>; 22] = [
    Rule::new("ational", "ate", Condition::PositiveMeasure),
    Rule::new("tional", "tion", Condition::PositiveMeasure),
    Rule::new("enci", "ence", Condition::PositiveMeasure),
    Rule::new("anci", "ance", Condition::PositiveMeasure),
    Rule::new("izer", "ize", Condition::PositiveMeasure),
    Rule::new("bli", "ble", Condition::PositiveMeasure),
    Rule::new("alli", "al", Condition::PositiveMeasure),
    Rule::new("entli", "ent", Condition::PositiveMeasure),
    Rule::new("eli", "e", Condition::PositiveMeasure),
    Rule::new("ousli", "ous", Condition::PositiveMeasure),
    Rule::new("ization", "ize", Condition::PositiveMeasure),
    Rule::new("ation", "ate", Condition::PositiveMeasure),
    Rule::new("ator", "ate", Condition::PositiveMeasure),
    Rule::new("alism", "al", Condition::PositiveMeasure),
    Rule::new("iveness", "ive", Condition::PositiveMeasure),
    Rule::new("fulness", "ful", Condition::PositiveMeasure),
    Rule::new("ousness", "ous", Condition::PositiveMeasure),
    Rule::new("aliti", "al", Condition::PositiveMeasure),
    Rule::new("iviti", "ive", Condition::PositiveMeasure),
    Rule::new("biliti", "ble", Condition::PositiveMeasure),
    Rule::new("fulli", "ful", Condition::PositiveMeasure),
    Rule::new("logi", "log", Condition::Custom(logi_gate)),
];

/// Double suffixes reduced to single ones: "relational" -> "relate",
/// "digitizer" -> "digitize".
///
/// "alli" is rewritten to "al" first, and the result goes through this step
/// again ("sensationalli" -> "sensational" -> "sensate").
pub fn step2(word: &[u8]) -> Cow<'_, [u8]> {
    if let Some(stem) = word.strip_suffix(b"alli") {
        if has_positive_measure(stem) {
            let rewritten = replace_suffix(word, 4, b"al");
            return Cow::Owned(step2(&rewritten).into_owned());
        }
    }
    apply_rule_list(word, &STEP2_RULES)
}

static STEP3_RULES: [Rule<'static>; 7] = [
    Rule::new("icate", "ic", Condition::PositiveMeasure),
    Rule::new("ative", "", Condition::PositiveMeasure),
    Rule::new("alize", "al", Condition::PositiveMeasure),
    Rule::new("iciti", "ic", Condition::PositiveMeasure),
    Rule::new("ical", "ic", Condition::PositiveMeasure),
    Rule::new("ful", "", Condition::PositiveMeasure),
    Rule::new("ness", "", Condition::PositiveMeasure),
];

/// "-ic-", "-full", "-ness" and friends: "triplicate" -> "triplic",
/// "goodness" -> "good".
pub fn step3(word: &[u8]) -> Cow<'_, [u8]> {
    apply_rule_list(word, &STEP3_RULES)
}

/// "ion" only goes after "s" or "t" ("adoption" -> "adopt").
fn ion_gate(candidate: &Candidate<'_>) -> bool {
    matches!(candidate.stem.last(), Some(b's' | b't')) && has_gt1_measure(candidate.stem)
}

static STEP4_RULES: [Rule<'static>; 19] = [
    Rule::new("al", "", Condition::MeasureAbove1),
    Rule::new("ance", "", Condition::MeasureAbove1),
    Rule::new("ence", "", Condition::MeasureAbove1),
    Rule::new("er", "", Condition::MeasureAbove1),
    Rule::new("ic", "", Condition::MeasureAbove1),
    Rule::new("able", "", Condition::MeasureAbove1),
    Rule::new("ible", "", Condition::MeasureAbove1),
    Rule::new("ant", "", Condition::MeasureAbove1),
    Rule::new("ement", "", Condition::MeasureAbove1),
    Rule::new("ment", "", Condition::MeasureAbove1),
    Rule::new("ent", "", Condition::MeasureAbove1),
    Rule::new("ion", "", Condition::Custom(ion_gate)),
    Rule::new("ou", "", Condition::MeasureAbove1),
    Rule::new("ism", "", Condition::MeasureAbove1),
    Rule::new("ate", "", Condition::MeasureAbove1),
    Rule::new("iti", "", Condition::MeasureAbove1),
    Rule::new("ous", "", Condition::MeasureAbove1),
    Rule::new("ive", "", Condition::MeasureAbove1),
    Rule::new("ize", "", Condition::MeasureAbove1),
];

/// Residual suffixes dropped from stems with `m > 1`: "allowance" ->
/// "allow", "adjustment" -> "adjust".
pub fn step4(word: &[u8]) -> Cow<'_, [u8]> {
    apply_rule_list(word, &STEP4_RULES)
}

// ---------------------------------------------------------------------------
// Step 5: tidying up
// ---------------------------------------------------------------------------

/// A final "e" is dropped when `m > 1`, or when `m == 1` and the stem does
/// not end CVC: "probate" -> "probat", "cease" -> "ceas", "rate" kept.
pub fn step5a(word: &[u8]) -> Cow<'_, [u8]> {
    if let Some(stem) = word.strip_suffix(b"e") {
        let m = measure(stem);
        if m > 1 || (m == 1 && !ends_cvc(stem)) {
            return Cow::Borrowed(stem);
        }
    }
    Cow::Borrowed(word)
}

fn drops_final_l(candidate: &Candidate<'_>) -> bool {
    let word = candidate.word;
    has_gt1_measure(&word[..word.len() - 1])
}

static STEP5B_RULES: [Rule<'static>; 1] =
    [Rule::new("ll", "l", Condition::Custom(drops_final_l))];

/// "ll" becomes "l" when `m > 1`: "controll" -> "control", "roll" kept.
pub fn step5b(word: &[u8]) -> Cow<'_, [u8]> {
    apply_rule_list(word, &STEP5B_RULES)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(step: Step, cases: &[(&str, &str)]) {
        for &(word, expected) in cases {
            let out = step(word.as_bytes());
            assert_eq!(
                std::str::from_utf8(&out).unwrap(),
                expected,
                "word {word:?}"
            );
        }
    }

    #[test]
    fn step1a_plurals() {
        check(
            step1a,
            &[
                ("caresses", "caress"),
                ("ponies", "poni"),
                ("ties", "tie"),
                ("pies", "pie"),
                ("caress", "caress"),
                ("cats", "cat"),
            ],
        );
    }

    #[test]
    fn step1b_eed() {
        check(
            step1b,
            &[("feed", "feed"), ("agreed", "agree"), ("bleed", "bleed"), ("eed", "eed")],
        );
    }

    #[test]
    fn step1b_ied() {
        check(step1b, &[("died", "die"), ("cried", "cri"), ("spied", "spi")]);
    }

    #[test]
    fn step1b_ed_and_ing() {
        check(
            step1b,
            &[
                ("plastered", "plaster"),
                ("bled", "bled"),
                ("motoring", "motor"),
                ("sing", "sing"),
                ("ed", "ed"),
            ],
        );
    }

    #[test]
    fn step1b_cleanup_after_removal() {
        check(
            step1b,
            &[
                ("conflated", "conflate"),
                ("troubled", "trouble"),
                ("sized", "size"),
                ("hopping", "hop"),
                ("tanned", "tan"),
                ("falling", "fall"),
                ("hissing", "hiss"),
                ("fizzed", "fizz"),
                ("failing", "fail"),
                ("filing", "file"),
            ],
        );
    }

    #[test]
    fn step1c_terminal_y() {
        check(
            step1c,
            &[
                ("happy", "happi"),
                ("sky", "ski"),
                ("cry", "cri"),
                ("by", "by"),
                ("say", "say"),
                ("toy", "toy"),
            ],
        );
    }

    #[test]
    fn step2_table() {
        check(
            step2,
            &[
                ("relational", "relate"),
                ("conditional", "condition"),
                ("rational", "rational"),
                ("valenci", "valence"),
                ("hesitanci", "hesitance"),
                ("digitizer", "digitize"),
                ("conformabli", "conformable"),
                ("radicalli", "radical"),
                ("differentli", "different"),
                ("vileli", "vile"),
                ("analogousli", "analogous"),
                ("vietnamization", "vietnamize"),
                ("predication", "predicate"),
                ("operator", "operate"),
                ("feudalism", "feudal"),
                ("decisiveness", "decisive"),
                ("hopefulness", "hopeful"),
                ("callousness", "callous"),
                ("formaliti", "formal"),
                ("sensitiviti", "sensitive"),
                ("sensibiliti", "sensible"),
                ("hopefulli", "hopeful"),
            ],
        );
    }

    #[test]
    fn step2_alli_reruns_the_step() {
        check(
            step2,
            &[("sensationalli", "sensate"), ("generalli", "general")],
        );
    }

    #[test]
    fn step2_logi_gates_on_truncated_word() {
        // The residual "a" has m == 0 but "al" has m == 1.
        check(step2, &[("alogi", "alog"), ("xlogi", "xlogi")]);
    }

    #[test]
    fn step3_table() {
        check(
            step3,
            &[
                ("triplicate", "triplic"),
                ("formative", "form"),
                ("formalize", "formal"),
                ("electriciti", "electric"),
                ("electrical", "electric"),
                ("hopeful", "hope"),
                ("goodness", "good"),
                ("ness", "ness"),
            ],
        );
    }

    #[test]
    fn step4_table() {
        check(
            step4,
            &[
                ("revival", "reviv"),
                ("allowance", "allow"),
                ("inference", "infer"),
                ("airliner", "airlin"),
                ("gyroscopic", "gyroscop"),
                ("adjustable", "adjust"),
                ("defensible", "defens"),
                ("irritant", "irrit"),
                ("replacement", "replac"),
                ("adjustment", "adjust"),
                ("dependent", "depend"),
                ("adoption", "adopt"),
                ("homologou", "homolog"),
                ("communism", "commun"),
                ("activate", "activ"),
                ("angulariti", "angular"),
                ("homologous", "homolog"),
                ("effective", "effect"),
                ("bowdlerize", "bowdler"),
            ],
        );
    }

    #[test]
    fn step4_ion_needs_s_or_t() {
        check(step4, &[("ion", "ion"), ("lion", "lion"), ("nation", "nation")]);
    }

    #[test]
    fn step4_stops_at_first_matching_suffix() {
        // "ment" matches and fails; "ent" is never tried.
        check(step4, &[("ornament", "ornament"), ("cement", "cement")]);
    }

    #[test]
    fn step5a_final_e() {
        check(
            step5a,
            &[
                ("probate", "probat"),
                ("rate", "rate"),
                ("cease", "ceas"),
                ("hope", "hope"),
                ("e", "e"),
            ],
        );
    }

    #[test]
    fn step5b_double_l() {
        check(
            step5b,
            &[
                ("controll", "control"),
                ("distill", "distil"),
                ("roll", "roll"),
                ("ll", "ll"),
            ],
        );
    }

    #[test]
    fn step5a_returns_a_prefix() {
        let out = step5a(b"probate");
        assert!(matches!(out, Cow::Borrowed(_)));
        assert_eq!(&*out, b"probat");
    }
}
