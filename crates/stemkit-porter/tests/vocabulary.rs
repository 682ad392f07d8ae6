//! Large-corpus test: stem a reference vocabulary and compare every line
//! against the reference stemmer's output.
//!
//! The corpus lives in ../../test-data/ (relative to the crate root) as
//! `porter_test_vocabulary.txt.gz` and `porter_test_output.txt.gz`. Set
//! STEMKIT_PORTER_DATA to a directory holding another corpus under the same
//! names, gzipped or plain `.txt`.
//!
//! Run: cargo test -p stemkit-porter --test vocabulary

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use flate2::read::GzDecoder;

const VOCABULARY_FILE: &str = "porter_test_vocabulary";
const OUTPUT_FILE: &str = "porter_test_output";

/// Maximum number of mismatches spelled out in the failure message.
const MAX_REPORTED: usize = 50;

/// `<name>.txt.gz` or `<name>.txt` in `dir`, preferring the gzipped file.
fn corpus_file(dir: &Path, name: &str) -> Option<PathBuf> {
    ["txt.gz", "txt"]
        .into_iter()
        .map(|ext| dir.join(format!("{name}.{ext}")))
        .find(|path| path.is_file())
}

/// Find the vocabulary and output files, from the same directory.
fn find_corpus() -> Option<(PathBuf, PathBuf)> {
    let mut candidates = Vec::new();
    if let Ok(dir) = std::env::var("STEMKIT_PORTER_DATA") {
        candidates.push(PathBuf::from(dir));
    }
    candidates.push(PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data"));

    candidates.into_iter().find_map(|dir| {
        let vocabulary = corpus_file(&dir, VOCABULARY_FILE)?;
        let output = corpus_file(&dir, OUTPUT_FILE)?;
        Some((vocabulary, output))
    })
}

fn read_lines(path: &Path) -> Vec<String> {
    let file = File::open(path).unwrap_or_else(|e| panic!("failed to open {}: {}", path.display(), e));
    let mut reader: Box<dyn Read> = if path.extension().is_some_and(|ext| ext == "gz") {
        Box::new(GzDecoder::new(file))
    } else {
        Box::new(file)
    };
    let mut contents = String::new();
    reader
        .read_to_string(&mut contents)
        .unwrap_or_else(|e| panic!("failed to read {}: {}", path.display(), e));
    contents.trim().lines().map(str::to_string).collect()
}

#[test]
fn checked_in_corpus_is_found() {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../test-data");
    assert!(corpus_file(&dir, VOCABULARY_FILE).is_some());
    assert!(corpus_file(&dir, OUTPUT_FILE).is_some());
}

#[test]
fn vocabulary_matches_reference_output() {
    let Some((vocabulary_path, output_path)) = find_corpus() else {
        eprintln!("SKIP: porter corpus not found. Set STEMKIT_PORTER_DATA or place it in test-data/");
        return;
    };

    let vocabulary = read_lines(&vocabulary_path);
    let expected = read_lines(&output_path);
    assert!(!vocabulary.is_empty(), "empty vocabulary {}", vocabulary_path.display());
    assert_eq!(
        vocabulary.len(),
        expected.len(),
        "vocabulary length does not match output length"
    );

    let mut mismatches = 0usize;
    let mut report = Vec::new();
    for (line, (word, want)) in vocabulary.iter().zip(&expected).enumerate() {
        let got = stemkit_porter::stem(word);
        if &got != want {
            mismatches += 1;
            if report.len() < MAX_REPORTED {
                report.push(format!("  line {}: {word:?} became {got:?} instead of {want:?}", line + 1));
            }
        }
    }

    assert_eq!(
        mismatches,
        0,
        "{mismatches} of {} words differ:\n{}",
        vocabulary.len(),
        report.join("\n")
    );
}
