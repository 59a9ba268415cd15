//! msc-transform CLI
//!
//! Turns a directory of downloaded statement text files into a single CSV
//! dataset with one row per document (identifier, word count, flattened
//! text).

use std::path::PathBuf;

use clap::Parser;
use msc_cli_common::{LogLevel, format_number};
use msc_corpus::{CORPUS_FILE_NAME, build_corpus, write_corpus};
use msc_error::Result;
use tracing::info;

/// Transform downloaded Modern Slavery statements into one tabular dataset.
///
/// Every entry in the input directory must be a regular `.txt` file; anything
/// else aborts the transform and no table is written.
#[derive(Parser, Debug)]
#[command(name = "msc-transform")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory of downloaded statement text files
    #[arg(default_value = "data")]
    input: PathBuf,

    /// Where to write the corpus table
    #[arg(long, default_value = CORPUS_FILE_NAME)]
    output: PathBuf,

    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    log_level: LogLevel,
}

fn main() {
    let args = Cli::parse();

    if let Err(e) = msc_cli_common::init_logging(args.log_level) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    if let Err(e) = execute(&args) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn execute(args: &Cli) -> Result<()> {
    info!(input = %args.input.display(), "Transforming corpus");

    let rows = build_corpus(&args.input)?;
    let total_words: u64 = rows.iter().map(|row| row.word_count).sum();
    write_corpus(&args.output, &rows)?;

    eprintln!();
    eprintln!("Transform completed:");
    eprintln!("  Documents: {}", format_number(rows.len() as u64));
    eprintln!("  Words:     {}", format_number(total_words));
    eprintln!("  Output:    {}", args.output.display());

    Ok(())
}
