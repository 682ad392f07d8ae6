// stemkit-cli: shared utilities for CLI tools.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process;

use flate2::read::GzDecoder;
use stemkit_synonym::SynonymError;
use tracing_subscriber::EnvFilter;

/// Synonym data file names, plain and gzipped.
const DATA_FILES: [&str; 2] = ["words.txt", "words.txt.gz"];

/// Environment variable naming the synonym data file or its directory.
pub const DATA_PATH_ENV: &str = "STEMKIT_DATA_PATH";

#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Synonym(#[from] SynonymError),
    #[error("failed to read {}: {source}", path.display())]
    ReadFile {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not find words.txt in any of the search paths:\n{}", list_paths(searched))]
    DataNotFound { searched: Vec<PathBuf> },
    #[error("line counts differ: {words} words but {expected} expected stems")]
    LineCountMismatch { words: usize, expected: usize },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

fn list_paths(paths: &[PathBuf]) -> String {
    paths
        .iter()
        .map(|p| format!("  - {}", p.display()))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Install the stderr log subscriber. `RUST_LOG` overrides the default
/// `warn` level.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Locate the synonym data file.
///
/// Search order:
/// 1. `explicit` argument (if provided)
/// 2. `STEMKIT_DATA_PATH` environment variable, as a file or as a directory
///    containing `words.txt`
/// 3. `~/.stemkit/words.txt`
/// 4. `./data/words.txt`
///
/// In each directory, `words.txt.gz` is tried after `words.txt`.
pub fn find_data_file(explicit: Option<&Path>) -> Result<PathBuf, CliError> {
    let env_path = std::env::var_os(DATA_PATH_ENV).map(PathBuf::from);
    let searched = build_search_paths(explicit, env_path.as_deref(), home_dir().as_deref());

    match searched.iter().find(|p| p.is_file()) {
        Some(found) => {
            tracing::debug!(path = %found.display(), "found synonym data");
            Ok(found.clone())
        }
        None => Err(CliError::DataNotFound { searched }),
    }
}

/// Candidate data file locations, in search order.
pub fn build_search_paths(
    explicit: Option<&Path>,
    env_path: Option<&Path>,
    home: Option<&Path>,
) -> Vec<PathBuf> {
    let mut paths = Vec::new();

    if let Some(p) = explicit {
        paths.push(p.to_path_buf());
    }

    if let Some(p) = env_path {
        paths.push(p.to_path_buf());
        paths.extend(DATA_FILES.map(|name| p.join(name)));
    }

    if let Some(home) = home {
        let dir = home.join(".stemkit");
        paths.extend(DATA_FILES.map(|name| dir.join(name)));
    }

    paths.extend(DATA_FILES.map(|name| Path::new("data").join(name)));
    paths
}

fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME").map(PathBuf::from)
}

/// Read a file as lines, without line terminators. Leading and trailing
/// whitespace of the whole file, blank lines included, is ignored. Files
/// ending in `.gz` are decompressed.
pub fn read_lines(path: &Path) -> Result<Vec<String>, CliError> {
    let read_error = |source| CliError::ReadFile {
        path: path.to_path_buf(),
        source,
    };

    let file = File::open(path).map_err(read_error)?;
    let mut text = String::new();
    let read = if path.extension().is_some_and(|ext| ext == "gz") {
        GzDecoder::new(file).read_to_string(&mut text)
    } else {
        std::io::BufReader::new(file).read_to_string(&mut text)
    };
    read.map_err(read_error)?;

    Ok(text.trim().lines().map(str::to_string).collect())
}

/// A word whose stem differs from the expected one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mismatch {
    /// 1-based line number.
    pub line: usize,
    pub word: String,
    pub expected: String,
    pub actual: String,
}

#[derive(Debug, Default)]
pub struct CheckReport {
    pub total: usize,
    pub mismatches: Vec<Mismatch>,
}

impl CheckReport {
    pub fn passed(&self) -> usize {
        self.total - self.mismatches.len()
    }
}

/// Stem every word and compare against the stem on the same line of
/// `expected`.
pub fn check_stems(words: &[String], expected: &[String]) -> Result<CheckReport, CliError> {
    if words.len() != expected.len() {
        return Err(CliError::LineCountMismatch {
            words: words.len(),
            expected: expected.len(),
        });
    }

    let mismatches = words
        .iter()
        .zip(expected)
        .enumerate()
        .filter_map(|(i, (word, expected))| {
            let actual = stemkit_porter::stem(word);
            (actual != *expected).then(|| Mismatch {
                line: i + 1,
                word: word.clone(),
                expected: expected.clone(),
                actual,
            })
        })
        .collect();

    Ok(CheckReport {
        total: words.len(),
        mismatches,
    })
}

/// Print an error message and exit with code 1.
pub fn fatal(msg: &str) -> ! {
    eprintln!("error: {msg}");
    process::exit(1);
}
