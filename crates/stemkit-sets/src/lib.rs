//! Set structures used around the stemmer.
//!
//! - [`disjoint_set`] -- union-find forest with union by size, used to
//!   cluster synonymous words
//! - [`trie`] -- binary trie over the bits of byte strings, used for
//!   membership queries

pub mod disjoint_set;
pub mod trie;
