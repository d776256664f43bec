use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;
use cruciverbal_core::{generator, scanner, DictionaryIndex, GeneratorConfig};
use cruciverbal_external::PuzzleDocument;
use cruciverbal_hints::HintBinder;
use thiserror::Error;

/// Generate crossword puzzles from a wordlist and an external hint model.
#[derive(Debug, Parser)]
#[command(name = "cruciverbal", version, about)]
pub struct Args {
    /// Side length of the (square) grid.
    #[arg(long, default_value_t = 15)]
    pub grid_len: usize,

    /// Path to a newline-delimited wordlist.
    #[arg(long = "wordlist-fp", default_value = "./wordlist.txt")]
    pub wordlist_fp: PathBuf,

    /// How many puzzles to generate.
    #[arg(long = "n-crosswords", short = 'n', default_value_t = 1)]
    pub n_crosswords: usize,

    /// Directory puzzle documents are written into.
    #[arg(long, default_value = "./output")]
    pub output_dir: PathBuf,

    /// Target number of words per puzzle.
    #[arg(long, default_value_t = 35)]
    pub words: usize,

    /// Wall-clock budget per puzzle, in seconds.
    #[arg(long, default_value_t = 5)]
    pub timeout_secs: u64,

    /// RNG seed; omit for a non-reproducible build.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Endpoint of the hint-generating language model.
    #[arg(long)]
    pub hint_endpoint: String,
}

#[derive(Debug, Error)]
pub enum CliError {
    #[error("dictionary setup failed: {0}")]
    Dictionary(#[from] cruciverbal_external::ExternalError),

    #[error("puzzle generation failed: {0}")]
    Generator(#[from] cruciverbal_core::GeneratorError),

    #[error("hint model failed: {0}")]
    Hint(#[from] cruciverbal_hints::HintError),
}

/// Load the dictionary once, then build and write `args.n_crosswords` puzzles.
/// A setup failure (missing dictionary, unreadable output directory, or a
/// hint-model that never converges) aborts the whole run without emitting
/// partial output for the puzzle in progress.
pub async fn run(args: Args) -> Result<(), CliError> {
    let dictionary = cruciverbal_external::load_dictionary(&args.wordlist_fp, args.grid_len)?;
    let index = DictionaryIndex::build(&dictionary);
    let binder = HintBinder::new(args.hint_endpoint.clone());

    let config = GeneratorConfig {
        grid_len: args.grid_len,
        n_words: args.words,
        time_budget: Duration::from_secs(args.timeout_secs),
        seed: args.seed,
    };

    for puzzle_index in 0..args.n_crosswords {
        log::info!("generating puzzle {}/{}", puzzle_index + 1, args.n_crosswords);
        let grid = generator::generate(&dictionary, &index, &config)?;

        let words: Vec<_> = scanner::scan(&grid).into_iter().collect();
        let hinted = binder.bind_all(&words).await?;

        let document = PuzzleDocument::build(&grid, &hinted);
        let path = document.write_to_dir(&args.output_dir)?;
        log::info!("puzzle {} written to {}", puzzle_index + 1, path.display());
    }

    Ok(())
}
