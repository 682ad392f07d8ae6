//! Porter stemmer for English.
//!
//! [`stem`] reduces an inflected word to a lookup key shared by its
//! related forms ("running", "runs" -> "run"). The output reproduces the
//! reference Porter implementation, including its irregular-form table and
//! its departures from the original paper.
//!
//! # Architecture
//!
//! - [`irregular`] -- forms mapped straight to a stem, consulted first
//! - [`rule`] -- `(suffix, replacement, condition)` rules and their matcher
//! - [`steps`] -- the eight steps built from rule tables
//!
//! The consonant/vowel primitives live in `stemkit-core`.
//!
//! ```
//! assert_eq!(stemkit_porter::stem("CARESSES"), "caress");
//! assert_eq!(stemkit_porter::stem("dying"), "die");
//! assert_eq!(stemkit_porter::stem("Ox"), "Ox");
//! ```

pub mod irregular;
pub mod rule;
pub mod steps;

use std::borrow::Cow;

use crate::irregular::irregular_stem;
use crate::steps::PIPELINE;

/// Stem a single word.
///
/// The word is lowercased and looked up in the irregular-form table. Words
/// of at most two bytes are returned exactly as given, case included.
/// Everything else runs through every step of [`PIPELINE`] in order.
///
/// Never panics. Input outside lowercase-able ASCII letters still produces
/// a result, but which one is unspecified.
pub fn stem(word: &str) -> String {
    let lowered = word.to_lowercase();

    if let Some(stem) = irregular_stem(&lowered) {
        return stem.to_string();
    }

    if word.len() <= 2 {
        return word.to_string();
    }

    let stemmed = run_pipeline(lowered.into_bytes());
    match String::from_utf8(stemmed) {
        Ok(stemmed) => stemmed,
        // Stripping bytes off a non-ASCII word can split a character.
        Err(e) => String::from_utf8_lossy(e.as_bytes()).into_owned(),
    }
}

/// Run all steps over an already lowercased word.
///
/// Unlike [`stem`], this skips the irregular-form table and the short-word
/// passthrough.
pub fn run_pipeline(word: Vec<u8>) -> Vec<u8> {
    let mut current = word;
    for step in PIPELINE {
        // Borrowed results are always a prefix of the input.
        let next = match step(&current) {
            Cow::Borrowed(kept) => Err(kept.len()),
            Cow::Owned(rewritten) => Ok(rewritten),
        };
        match next {
            Ok(rewritten) => current = rewritten,
            Err(kept_len) => current.truncate(kept_len),
        }
    }
    current
}
