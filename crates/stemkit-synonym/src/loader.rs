// Synonym data files.
//
// One group per line, as comma-separated phrases:
//
//   adore, admire, love, worship
//   big, large, huge, great deal
//
// Phrases are trimmed. Phrases containing whitespace ("great deal") are
// skipped, as are empty phrases left by stray commas. The remaining words of
// a line form one group. Files whose name ends in `.gz` are decompressed
// while reading.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use flate2::read::GzDecoder;
use tracing::{debug, trace};

use crate::{SynonymError, Synonyms, Transform};

/// Counters from one load.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Lines read, including blank ones.
    pub lines: usize,
    /// Words ingested.
    pub words: usize,
    /// Multi-word phrases skipped.
    pub skipped: usize,
}

impl<T: Transform> Synonyms<T> {
    /// Ingest every line of `reader` as one group.
    pub fn load_from_reader<R: BufRead>(&mut self, reader: R) -> Result<LoadStats, SynonymError> {
        let mut stats = LoadStats::default();

        for line in reader.lines() {
            let line = line?;
            stats.lines += 1;

            let mut words = Vec::new();
            for phrase in line.split(',').map(str::trim) {
                if phrase.is_empty() {
                    continue;
                }
                if phrase.contains(char::is_whitespace) {
                    trace!(phrase, line = stats.lines, "skipping multi-word phrase");
                    stats.skipped += 1;
                    continue;
                }
                words.push(phrase);
            }

            stats.words += words.len();
            self.ingest(words);
        }

        debug!(
            lines = stats.lines,
            words = stats.words,
            skipped = stats.skipped,
            groups = self.group_count(),
            "loaded synonym data"
        );
        Ok(stats)
    }

    /// Open `path` and ingest it with [`Synonyms::load_from_reader`],
    /// gunzipping it first when the extension is `gz`.
    pub fn load_from_path(&mut self, path: impl AsRef<Path>) -> Result<LoadStats, SynonymError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| SynonymError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "reading synonym file");
        if path.extension().is_some_and(|ext| ext == "gz") {
            self.load_from_reader(BufReader::new(GzDecoder::new(file)))
        } else {
            self.load_from_reader(BufReader::new(file))
        }
    }
}
