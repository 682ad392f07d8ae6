// Irregular forms that bypass the suffix rules.

use std::sync::LazyLock;

use hashbrown::HashMap;

/// Stem followed by every form that maps to it.
const IRREGULAR_STEMS: &[(&str, &[&str])] = &[
    ("sky", &["sky", "skies"]),
    ("die", &["dying"]),
    ("lie", &["lying"]),
    ("tie", &["tying"]),
    ("news", &["news"]),
    ("inning", &["innings", "inning"]),
    ("outing", &["outings", "outing"]),
    ("canning", &["cannings", "canning"]),
    ("howe", &["howe"]),
    ("proceed", &["proceed"]),
    ("exceed", &["exceed"]),
    ("succeed", &["succeed"]),
];

/// Form -> stem, built on first use and read-only afterwards.
static IRREGULAR_FORMS: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    IRREGULAR_STEMS
        .iter()
        .flat_map(|&(stem, forms)| forms.iter().map(move |&form| (form, stem)))
        .collect()
});

/// Look up the stem of a lowercase irregular form.
pub fn irregular_stem(word: &str) -> Option<&'static str> {
    IRREGULAR_FORMS.get(word).copied()
}
