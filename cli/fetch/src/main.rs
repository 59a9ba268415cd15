//! msc-fetch CLI
//!
//! Downloads the latest Modern Slavery Statements corpus folder from S3 and
//! records a per-object metadata manifest.

use clap::Parser;
use msc_cli_common::{format_bytes, format_number};
use msc_error::{FetchError, MscError};

mod args;
mod progress;
mod run;

use args::Cli;

#[tokio::main]
async fn main() {
    let args = Cli::parse();

    // Logging goes to stderr, same as the progress and summary output
    if let Err(e) = msc_cli_common::init_logging(args.log_level) {
        eprintln!("Failed to initialize logging: {e}");
        std::process::exit(1);
    }

    match run::execute(args).await {
        Ok(report) => {
            eprintln!();
            eprintln!("Fetch completed:");
            eprintln!("  Selected folder:     {}", report.prefix);
            eprintln!(
                "  Objects listed:      {}",
                format_number(report.stats.objects_listed as u64)
            );
            eprintln!(
                "  Objects processed:   {}",
                format_number(report.stats.objects_matched as u64)
            );
            eprintln!(
                "  Objects transferred: {}",
                format_number(report.stats.objects_transferred as u64)
            );
            eprintln!(
                "  Bytes transferred:   {}",
                format_bytes(report.stats.bytes_transferred)
            );
            eprintln!(
                "  Manifest:            {} ({} rows)",
                report.manifest_path.display(),
                report.records_written
            );

            if let Some(duration) = report.stats.duration() {
                eprintln!(
                    "  Duration:            {:.2}s",
                    duration.num_milliseconds() as f64 / 1000.0
                );
            }
        }
        Err(MscError::Fetch(FetchError::Authentication(detail))) => {
            eprintln!("Authentication failed: {detail}");
            eprintln!(
                "Hint: pass --access-key and --secret-key explicitly, or configure \
                 the ambient AWS credential chain (environment or profile)."
            );
            std::process::exit(2);
        }
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(1);
        }
    }
}
