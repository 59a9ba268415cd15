//! CLI argument definitions for msc-fetch.

use std::path::PathBuf;

use clap::Parser;
use msc_cli_common::LogLevel;

/// Modern Slavery Statements corpus downloader.
///
/// Lists the corpus bucket, picks the latest top-level folder (folder names
/// embed a sortable date, so the lexicographically greatest name is the most
/// recent collection run), downloads every statement under it to a local
/// directory mirroring the remote keys, and writes a CSV manifest of
/// per-object metadata.
///
/// ## Examples
///
/// Fetch the latest folder with ambient AWS credentials:
///   msc-fetch
///
/// Fetch with explicit credentials into ./downloads:
///   msc-fetch --access-key AKIA... --secret-key ... --dest downloads
///
/// Gather the manifest only, transferring nothing:
///   msc-fetch --only-metadata --metadata-output ./metadatas.csv
#[derive(Parser, Debug)]
#[command(name = "msc-fetch")]
#[command(version, about, long_about = None)]
pub struct Cli {
    // === S3 Configuration ===
    /// S3 bucket holding the corpus
    #[arg(
        short,
        long,
        env = "MSC_S3_BUCKET",
        default_value = "modern-slavery-dataset-txt"
    )]
    pub bucket: String,

    /// AWS access key ID (must be paired with --secret-key)
    #[arg(long, env = "AWS_ACCESS_KEY_ID")]
    pub access_key: Option<String>,

    /// AWS secret access key (must be paired with --access-key)
    #[arg(long, env = "AWS_SECRET_ACCESS_KEY")]
    pub secret_key: Option<String>,

    /// AWS region
    #[arg(long, env = "AWS_REGION", default_value = "us-east-1")]
    pub region: String,

    /// Custom S3 endpoint URL (for LocalStack)
    #[arg(long, env = "MSC_S3_ENDPOINT")]
    pub s3_endpoint: Option<String>,

    // === Fetch Options ===
    /// Local root directory; objects land at <dest>/<key>
    #[arg(long, default_value = ".")]
    pub dest: PathBuf,

    /// Where to write the metadata manifest
    #[arg(long, default_value = "./metadatas.csv")]
    pub metadata_output: PathBuf,

    /// Record metadata without transferring any object
    #[arg(long)]
    pub only_metadata: bool,

    // === Progress Options ===
    /// Seconds between progress reports
    #[arg(long, default_value = "5", value_parser = parse_positive_u64)]
    pub progress_interval: u64,

    /// Disable progress reporting
    #[arg(long)]
    pub no_progress: bool,

    // === Logging Options ===
    /// Log level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

/// Parse a positive u64 (>= 1).
fn parse_positive_u64(s: &str) -> Result<u64, String> {
    let value: u64 = s
        .parse()
        .map_err(|_| format!("'{}' is not a valid number", s))?;
    if value < 1 {
        return Err(format!("{} is not in 1..", value));
    }
    Ok(value)
}
