// stemkit-check: Validate the stemmer against a reference vocabulary.
//
// Usage:
//   stemkit-check [--max-report N] VOCABULARY EXPECTED
//
// VOCABULARY holds one word per line and EXPECTED the reference stem on the
// same line. Either file may be gzipped (`.gz`). Prints mismatches and a summary. Exits with status 1 when any
// stem differs.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;

#[derive(Parser)]
#[command(name = "stemkit-check", version, about = "Compare stems against a reference vocabulary")]
struct Args {
    /// Input words, one per line.
    vocabulary: PathBuf,

    /// Expected stems, one per line.
    expected: PathBuf,

    /// Maximum number of mismatches to print.
    #[arg(long, default_value_t = 20)]
    max_report: usize,
}

fn main() -> ExitCode {
    stemkit_cli::init_tracing();
    let args = Args::parse();

    let words =
        stemkit_cli::read_lines(&args.vocabulary).unwrap_or_else(|e| stemkit_cli::fatal(&e.to_string()));
    let expected =
        stemkit_cli::read_lines(&args.expected).unwrap_or_else(|e| stemkit_cli::fatal(&e.to_string()));
    let report = stemkit_cli::check_stems(&words, &expected)
        .unwrap_or_else(|e| stemkit_cli::fatal(&e.to_string()));

    for m in report.mismatches.iter().take(args.max_report) {
        println!(
            "line {}: {:?} -> {:?}, expected {:?}",
            m.line, m.word, m.actual, m.expected
        );
    }
    if report.mismatches.len() > args.max_report {
        println!("... and {} more", report.mismatches.len() - args.max_report);
    }

    println!("{}/{} stems match", report.passed(), report.total);

    if report.mismatches.is_empty() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
