//! Word Finder - CLI
//!
//! Finds every dictionary word that can be spelled from a set of letters, and
//! keeps the dictionary itself up to date.

use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::EnvFilter;
use word_finder::{
    commands::{EditCommand, FindConfig, find_words, run_edit},
    dictionary::{DEFAULT_DICTIONARY, DictionarySource},
    output::{print_edit_result, print_find_result},
};

#[derive(Parser)]
#[command(
    name = "word_finder",
    about = "Find the dictionary words you can spell from a set of letters",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Dictionary file, one word per line
    #[arg(short, long, global = true, env = "WORD_FINDER_DICT", default_value = DEFAULT_DICTIONARY)]
    dict: PathBuf,

    /// Log more detail to stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Find words that can be formed from LETTERS
    ///
    /// With no constraint, words of 3 to 8 letters are found (never longer than
    /// the number of letters). One number finds words of exactly that length,
    /// two numbers a length range. Anything else is a pattern: letters at fixed
    /// places, '_' for open cells, e.g. `c__t`.
    Find {
        /// The letters to spell with (a-z, no separators)
        letters: String,

        /// Optional length, min and max lengths, or pattern
        #[arg(allow_negative_numbers = true)]
        constraints: Vec<String>,

        /// Only print the number of words found
        #[arg(short, long)]
        quiet: bool,
    },

    /// Add a word to the dictionary, keeping it sorted
    Add {
        /// The word to add
        word: String,
    },

    /// Remove a word (every copy, ignoring case) from the dictionary
    Remove {
        /// The word to remove
        word: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let source = DictionarySource::new(cli.dict);

    match cli.command {
        Commands::Find {
            letters,
            constraints,
            quiet,
        } => run_find_command(letters, constraints, quiet, &source),
        Commands::Add { word } => run_edit_command(EditCommand::Add(word), &source),
        Commands::Remove { word } => run_edit_command(EditCommand::Remove(word), &source),
    }
}

fn run_find_command(
    letters: String,
    constraints: Vec<String>,
    quiet: bool,
    source: &DictionarySource,
) -> Result<()> {
    let config = FindConfig::new(letters, constraints);
    let result = find_words(&config, source)?;

    print_find_result(&result, quiet);
    Ok(())
}

fn run_edit_command(command: EditCommand, source: &DictionarySource) -> Result<()> {
    let result = run_edit(command, source)?;
    print_edit_result(&result);
    Ok(())
}

fn init_logging(verbosity: u8) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();

    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbosity, rust_log.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

/// `RUST_LOG`, when set and valid, takes precedence over `-v`
fn log_filter(verbosity: u8, rust_log: Option<&str>) -> EnvFilter {
    let level = match verbosity {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };

    rust_log
        .filter(|directives| !directives.trim().is_empty())
        .and_then(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(level.as_str()))
}
