// Loads the bundled synonym data with the Porter stemmer as transform.

use std::path::PathBuf;

use stemkit_synonym::{LoadStats, Synonyms};

fn data_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../data").join(name)
}

fn load(name: &str) -> Option<(Synonyms<fn(&str) -> String>, LoadStats)> {
    let path = data_path(name);
    if !path.is_file() {
        eprintln!("SKIP: {} not found", path.display());
        return None;
    }
    let mut synonyms = Synonyms::with_transform(stemkit_porter::stem as fn(&str) -> String);
    let stats = synonyms.load_from_path(&path).unwrap();
    Some((synonyms, stats))
}

fn check_groups(synonyms: &Synonyms<fn(&str) -> String>) {
    let table = [
        ("adore", "admire", true),
        ("adoring", "worshipped", true),
        ("adore", "accomodating", false),
        ("huge", "enormous", true),
        ("huge", "tiny", false),
    ];
    for (a, b, expected) in table {
        assert_eq!(synonyms.are_synonyms(a, b), expected, "{a} ~ {b}");
    }
}

#[test]
fn stemmed_data_file() {
    let Some((synonyms, stats)) = load("words.txt") else {
        return;
    };
    assert!(stats.words > 0);
    assert!(stats.skipped > 0, "multi-word phrases are skipped");
    check_groups(&synonyms);
}

#[test]
fn gzipped_data_file_matches_plain() {
    let (Some((gzipped, gz_stats)), Some((_, plain_stats))) = (load("words.txt.gz"), load("words.txt"))
    else {
        return;
    };
    assert_eq!(gz_stats, plain_stats);
    check_groups(&gzipped);
}
