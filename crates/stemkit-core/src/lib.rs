//! Linguistic primitives shared by the stemkit crates.
//!
//! Words are handled as byte slices. The classifier and measure functions
//! are defined for lowercase ASCII letters; any other byte is treated as a
//! consonant, which keeps every function total without making its output
//! meaningful for such input.
//!
//! - [`character`] -- per-position consonant/vowel classification
//! - [`measure`] -- the measure `m` and the predicates derived from it

pub mod character;
pub mod measure;
