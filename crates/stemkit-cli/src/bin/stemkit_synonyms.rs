// stemkit-synonyms: Look up synonym groups.
//
// Usage:
//   stemkit-synonyms [--data PATH] [--no-stem] WORD [WORD...]
//
// Loads the synonym data file and prints each word's group representative.
// With exactly two words, also reports whether they are synonyms.

use std::path::PathBuf;

use clap::Parser;
use stemkit_cli::CliError;
use stemkit_synonym::Synonyms;

#[derive(Parser)]
#[command(name = "stemkit-synonyms", version, about = "Look up synonym groups")]
struct Args {
    /// Synonym data file, one comma-separated group per line.
    #[arg(long, short = 'd')]
    data: Option<PathBuf>,

    /// Match words exactly instead of by stem.
    #[arg(long)]
    no_stem: bool,

    #[arg(required = true)]
    words: Vec<String>,
}

fn run(args: &Args) -> Result<(), CliError> {
    let path = stemkit_cli::find_data_file(args.data.as_deref())?;

    let transform: Box<dyn Fn(&str) -> String> = if args.no_stem {
        Box::new(|word: &str| word.to_string())
    } else {
        Box::new(stemkit_porter::stem)
    };
    let mut synonyms = Synonyms::with_transform(transform);
    let stats = synonyms.load_from_path(&path)?;
    tracing::info!(
        path = %path.display(),
        words = stats.words,
        skipped = stats.skipped,
        groups = synonyms.group_count(),
        "loaded synonyms"
    );

    for word in &args.words {
        println!("{word}\t{}", synonyms.synonym(word));
    }

    if let [a, b] = args.words.as_slice() {
        let verdict = if synonyms.are_synonyms(a, b) { "are" } else { "are not" };
        println!("{a:?} and {b:?} {verdict} synonyms");
    }

    Ok(())
}

fn main() {
    stemkit_cli::init_tracing();
    let args = Args::parse();
    run(&args).unwrap_or_else(|e| stemkit_cli::fatal(&e.to_string()));
}
