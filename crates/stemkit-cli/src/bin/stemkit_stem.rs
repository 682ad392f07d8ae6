// stemkit-stem: Stem English words.
//
// Usage:
//   stemkit-stem [--pairs] [WORD...]
//
// Stems each WORD, or each line of stdin when no words are given, and
// prints one stem per line.

use std::io::{self, BufRead, BufWriter, Write};

use clap::Parser;
use stemkit_cli::CliError;

#[derive(Parser)]
#[command(name = "stemkit-stem", version, about = "Stem English words with the Porter algorithm")]
struct Args {
    /// Words to stem. Reads one word per line from stdin when empty.
    words: Vec<String>,

    /// Print `word<TAB>stem` instead of the stem alone.
    #[arg(long)]
    pairs: bool,
}

fn write_stem(out: &mut impl Write, word: &str, pairs: bool) -> io::Result<()> {
    let stem = stemkit_porter::stem(word);
    if pairs {
        writeln!(out, "{word}\t{stem}")
    } else {
        writeln!(out, "{stem}")
    }
}

fn run(args: &Args) -> Result<(), CliError> {
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    if args.words.is_empty() {
        let mut count = 0usize;
        for line in io::stdin().lock().lines() {
            write_stem(&mut out, line?.trim(), args.pairs)?;
            count += 1;
        }
        tracing::info!(count, "stemmed stdin");
    } else {
        for word in &args.words {
            write_stem(&mut out, word, args.pairs)?;
        }
    }

    out.flush()?;
    Ok(())
}

fn main() {
    stemkit_cli::init_tracing();
    let args = Args::parse();
    run(&args).unwrap_or_else(|e| stemkit_cli::fatal(&e.to_string()));
}
