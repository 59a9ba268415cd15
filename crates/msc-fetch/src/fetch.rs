//! End-to-end fetch orchestration: list, select, download, record.

use std::path::{Path, PathBuf};

use aws_sdk_s3::Client;
use futures::{TryStreamExt, pin_mut};
use msc_error::{FetchError, Result};
use tracing::{debug, info};

use crate::downloader::Downloader;
use crate::latest::latest_group;
use crate::manifest::write_manifest;
use crate::s3::{S3Object, list_objects};
use crate::stats::FetchStats;
use crate::transfer::S3Transfer;

/// Parameters for one fetch run.
#[derive(Debug, Clone)]
pub struct FetchRequest {
    /// Bucket holding the corpus
    pub bucket: String,

    /// Local root directory that mirrors remote keys
    pub dest_root: PathBuf,

    /// Where to write the metadata manifest
    pub manifest_path: PathBuf,

    /// Gather the manifest without transferring any object
    pub only_metadata: bool,
}

impl FetchRequest {
    /// Create a request with the default destination (current directory)
    /// and manifest path (`./metadatas.csv`).
    pub fn new(bucket: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            dest_root: PathBuf::from("."),
            manifest_path: PathBuf::from("./metadatas.csv"),
            only_metadata: false,
        }
    }

    /// Set the local destination root.
    pub fn with_dest_root(mut self, dest_root: impl Into<PathBuf>) -> Self {
        self.dest_root = dest_root.into();
        self
    }

    /// Set the manifest output path.
    pub fn with_manifest_path(mut self, manifest_path: impl Into<PathBuf>) -> Self {
        self.manifest_path = manifest_path.into();
        self
    }

    /// Enable or disable only-metadata mode.
    pub fn with_only_metadata(mut self, only_metadata: bool) -> Self {
        self.only_metadata = only_metadata;
        self
    }
}

/// Summary of a completed fetch run.
#[derive(Debug)]
pub struct FetchReport {
    /// The selected folder prefix (trailing `/` included)
    pub prefix: String,

    /// Where the manifest was written
    pub manifest_path: PathBuf,

    /// Number of manifest rows written
    pub records_written: usize,

    /// Run counters
    pub stats: FetchStats,
}

/// Keep only the objects whose key starts with `prefix`, in catalog order.
pub fn objects_with_prefix(objects: Vec<S3Object>, prefix: &str) -> Vec<S3Object> {
    objects
        .into_iter()
        .filter(|obj| obj.key.starts_with(prefix))
        .collect()
}

/// Fetch the latest corpus folder from the bucket.
///
/// Lists the whole bucket, selects the lexicographically greatest top-level
/// folder, ensures the mirroring local directory exists, downloads every
/// object under that folder (unless `only_metadata` is set), and writes the
/// metadata manifest. `observe` is invoked once per processed object for
/// progress reporting.
///
/// # Errors
///
/// - [`FetchError::EmptyBucket`] when the bucket holds no objects
/// - [`FetchError::BucketNotFound`] / [`FetchError::Authentication`] from
///   the listing
/// - [`FetchError::Transfer`] on the first failed object fetch (fail-fast)
pub async fn fetch_latest<F>(
    client: &Client,
    request: &FetchRequest,
    observe: F,
) -> Result<FetchReport>
where
    F: FnMut(&S3Object),
{
    info!(bucket = %request.bucket, only_metadata = request.only_metadata, "Starting fetch");

    let objects = {
        let stream = list_objects(client, &request.bucket, None);
        pin_mut!(stream);
        stream.try_collect::<Vec<_>>().await?
    };
    let objects_listed = objects.len();
    debug!(objects = objects_listed, "Listed bucket");

    let prefix = latest_group(&request.bucket, &objects)?;
    info!(prefix = %prefix, "Selected latest folder");

    ensure_dir(&request.dest_root.join(&prefix)).await?;

    let matched = objects_with_prefix(objects, &prefix);

    let downloader = Downloader::new(
        S3Transfer::new(client.clone(), &request.bucket),
        &request.bucket,
        &request.dest_root,
        request.only_metadata,
    );

    let mut outcome = downloader.download_with(matched, observe).await?;
    outcome.stats.objects_listed = objects_listed;

    write_manifest(&request.manifest_path, &outcome.records)?;

    Ok(FetchReport {
        prefix,
        manifest_path: request.manifest_path.clone(),
        records_written: outcome.records.len(),
        stats: outcome.stats,
    })
}

async fn ensure_dir(path: &Path) -> Result<()> {
    tokio::fs::create_dir_all(path)
        .await
        .map_err(|e| FetchError::Io(format!("creating {}: {}", path.display(), e)).into())
}
