//! Synonym groups.
//!
//! Words are normalized by a [`Transform`] (typically a stemmer) and
//! clustered in a disjoint-set forest: ingesting a list of words puts them
//! all in one group, and groups that share a word merge. Each group is
//! represented by one of its members.
//!
//! ```
//! use stemkit_synonym::Synonyms;
//!
//! let mut synonyms = Synonyms::with_transform(stemkit_porter::stem);
//! synonyms.ingest(["adore", "admire"]);
//! synonyms.ingest(["admire", "worship"]);
//! assert!(synonyms.are_synonyms("adoring", "worshipped"));
//! ```

mod loader;

pub use loader::LoadStats;

use std::path::PathBuf;

use hashbrown::HashMap;
use stemkit_sets::disjoint_set::{DisjointSet, ElementId};

/// Error type for loading synonym data.
#[derive(Debug, thiserror::Error)]
pub enum SynonymError {
    #[error("failed to open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to read synonym data: {0}")]
    Read(#[from] std::io::Error),
}

/// Normalization applied to every word before it is stored or looked up.
pub trait Transform {
    fn transform(&self, word: &str) -> String;
}

/// Stores words exactly as given.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl Transform for Identity {
    fn transform(&self, word: &str) -> String {
        word.to_string()
    }
}

impl<F> Transform for F
where
    F: Fn(&str) -> String,
{
    fn transform(&self, word: &str) -> String {
        self(word)
    }
}

/// Synonym groups keyed by transformed word.
pub struct Synonyms<T = Identity> {
    words: HashMap<String, ElementId>,
    groups: DisjointSet<String>,
    transform: T,
}

impl Synonyms<Identity> {
    /// Groups over untransformed words.
    pub fn new() -> Self {
        Self::with_transform(Identity)
    }
}

impl Default for Synonyms<Identity> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Transform> Synonyms<T> {
    pub fn with_transform(transform: T) -> Self {
        Self {
            words: HashMap::new(),
            groups: DisjointSet::new(),
            transform,
        }
    }

    /// Put all of `words` into one group, merging any groups they already
    /// belong to. An empty list is ignored.
    pub fn ingest<I, S>(&mut self, words: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut words = words.into_iter();
        let Some(first) = words.next() else {
            return;
        };

        let first = self.ensure(first.as_ref());
        for word in words {
            let id = self.ensure(word.as_ref());
            self.groups.union(first, id);
        }
    }

    fn ensure(&mut self, word: &str) -> ElementId {
        let word = self.transform.transform(word);
        if let Some(&id) = self.words.get(word.as_str()) {
            return id;
        }
        let id = self.groups.make_set(word.clone());
        self.words.insert(word, id);
        id
    }

    fn lookup(&self, transformed: &str) -> Option<ElementId> {
        self.words.get(transformed).copied()
    }

    /// The representative of `word`'s group, or the transformed word
    /// itself when it is unknown.
    pub fn synonym(&self, word: &str) -> String {
        let word = self.transform.transform(word);
        match self.lookup(&word) {
            Some(id) => self.groups.value(self.groups.root(id)).clone(),
            None => word,
        }
    }

    /// Whether `a` and `b` transform to the same word or belong to the
    /// same group.
    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        let a = self.transform.transform(a);
        let b = self.transform.transform(b);
        if a == b {
            return true;
        }
        match (self.lookup(&a), self.lookup(&b)) {
            (Some(a), Some(b)) => self.groups.same_set(a, b),
            _ => false,
        }
    }

    /// Every stored word in `word`'s group, in insertion order. Empty when
    /// the word is unknown.
    pub fn group_members(&self, word: &str) -> Vec<&str> {
        let word = self.transform.transform(word);
        let Some(id) = self.lookup(&word) else {
            return Vec::new();
        };
        let root = self.groups.root(id);
        self.groups
            .iter()
            .filter(|&(member, _)| self.groups.root(member) == root)
            .map(|(_, value)| value.as_str())
            .collect()
    }

    /// Number of distinct stored words.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Number of groups.
    pub fn group_count(&self) -> usize {
        self.groups.set_count()
    }
}
