// WASM bindings for stemkit.
//
// Exports the stemmer as free functions and synonym groups as the
// `WasmSynonyms` class. Load statistics are serialized to JavaScript
// objects using serde-wasm-bindgen.
//
// Usage from JavaScript:
//
//   stem("running");                       // => "run"
//   stemAll(["caresses", "ponies"]);       // => ["caress", "poni"]
//
//   const synonyms = new WasmSynonyms(true);
//   synonyms.loadText(await (await fetch("words.txt")).text());
//                                          // => { lines: 10, words: 52, skipped: 3 }
//   synonyms.ingest(["adore", "admire"]);
//   synonyms.synonym("adoring");           // => "ador"
//   synonyms.areSynonyms("adore", "admired"); // => true

use std::io::Cursor;

use serde::Serialize;
use wasm_bindgen::prelude::*;

use stemkit_synonym::{LoadStats, SynonymError, Synonyms};

/// Serializable representation of load statistics.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsLoadStats {
    lines: usize,
    words: usize,
    skipped: usize,
    group_count: usize,
}

type TransformFn = fn(&str) -> String;

fn exact(word: &str) -> String {
    word.to_string()
}

/// Stem a single English word.
#[wasm_bindgen]
pub fn stem(word: &str) -> String {
    stemkit_porter::stem(word)
}

/// Stem every word of an array.
#[wasm_bindgen(js_name = "stemAll")]
pub fn stem_all(words: Vec<String>) -> Vec<String> {
    words.iter().map(|w| stemkit_porter::stem(w)).collect()
}

/// Synonym groups for WebAssembly.
#[wasm_bindgen]
pub struct WasmSynonyms {
    inner: Synonyms<TransformFn>,
}

#[wasm_bindgen]
impl WasmSynonyms {
    /// Create an empty set of groups. With `stemmed`, words are matched by
    /// their Porter stem; otherwise exactly.
    #[wasm_bindgen(constructor)]
    pub fn new(stemmed: bool) -> WasmSynonyms {
        let transform: TransformFn = if stemmed { stemkit_porter::stem } else { exact };
        WasmSynonyms {
            inner: Synonyms::with_transform(transform),
        }
    }

    /// Put all words into one group.
    pub fn ingest(&mut self, words: Vec<String>) {
        self.inner.ingest(words);
    }

    /// Load comma-separated groups, one per line.
    ///
    /// Returns `{ lines, words, skipped, groupCount }`.
    #[wasm_bindgen(js_name = "loadText")]
    pub fn load_text(&mut self, text: &str) -> Result<JsValue, JsError> {
        let stats = self.load(text).map_err(|e| JsError::new(&e.to_string()))?;
        let js_stats = JsLoadStats {
            lines: stats.lines,
            words: stats.words,
            skipped: stats.skipped,
            group_count: self.inner.group_count(),
        };
        serde_wasm_bindgen::to_value(&js_stats).map_err(|e| JsError::new(&e.to_string()))
    }

    fn load(&mut self, text: &str) -> Result<LoadStats, SynonymError> {
        self.inner.load_from_reader(Cursor::new(text.as_bytes()))
    }

    /// The representative of the word's group.
    pub fn synonym(&self, word: &str) -> String {
        self.inner.synonym(word)
    }

    #[wasm_bindgen(js_name = "areSynonyms")]
    pub fn are_synonyms(&self, a: &str, b: &str) -> bool {
        self.inner.are_synonyms(a, b)
    }

    /// Number of distinct stored words.
    #[wasm_bindgen(getter)]
    pub fn size(&self) -> usize {
        self.inner.len()
    }
}
