//! msc-fetch - S3 corpus retrieval for the ms-corpus tools.
//!
//! This crate downloads the Modern Slavery Statements text corpus from an S3
//! bucket. It supports:
//!
//! - S3 listing with pagination and LocalStack support
//! - Selecting the latest top-level folder by lexicographic name order
//! - Selective download of every object under the selected folder, mirroring
//!   remote keys locally
//! - A CSV manifest of per-object metadata, with an only-metadata mode that
//!   skips the transfers entirely
//!
//! # Example
//!
//! ```ignore
//! use msc_fetch::{CredentialSource, FetchRequest, S3Config, create_s3_client, fetch_latest};
//!
//! let s3_config = S3Config::new("modern-slavery-dataset-txt")
//!     .with_region("us-east-1")
//!     .with_credentials(CredentialSource::Ambient);
//!
//! let client = create_s3_client(&s3_config).await?;
//!
//! let request = FetchRequest::new("modern-slavery-dataset-txt");
//! let report = fetch_latest(&client, &request, |_| {}).await?;
//! eprintln!("Fetched {} objects from {}", report.records_written, report.prefix);
//! ```

pub mod credentials;
pub mod downloader;
pub mod fetch;
pub mod latest;
pub mod manifest;
pub mod s3;
pub mod stats;
pub mod transfer;

pub use credentials::CredentialSource;
pub use downloader::{DownloadOutcome, Downloader};
pub use fetch::{FetchReport, FetchRequest, fetch_latest, objects_with_prefix};
pub use latest::latest_group;
pub use manifest::{ManifestRecord, write_manifest};
pub use s3::{S3Config, S3Object, create_s3_client, list_objects};
pub use stats::FetchStats;
pub use transfer::{S3Transfer, Transfer};
