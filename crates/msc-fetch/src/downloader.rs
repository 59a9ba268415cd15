//! Selective download loop with metadata accounting.

use std::path::PathBuf;

use msc_error::Result;
use tracing::debug;

use crate::manifest::ManifestRecord;
use crate::s3::S3Object;
use crate::stats::FetchStats;
use crate::transfer::Transfer;

/// Result of a download pass: the ordered manifest records plus counters.
#[derive(Debug)]
pub struct DownloadOutcome {
    /// One record per processed object, in encounter order
    pub records: Vec<ManifestRecord>,
    /// Run counters
    pub stats: FetchStats,
}

/// Downloads a sequence of objects and accumulates their metadata records.
///
/// Generic over the [`Transfer`] implementation so the accounting can be
/// exercised without touching S3. In only-metadata mode no transfer is
/// performed at all; the record sequence is identical either way.
pub struct Downloader<T: Transfer> {
    transfer: T,
    bucket: String,
    dest_root: PathBuf,
    only_metadata: bool,
}

impl<T: Transfer> Downloader<T> {
    /// Create a new Downloader.
    ///
    /// # Arguments
    ///
    /// * `transfer` - The transfer implementation moving object bytes
    /// * `bucket` - The bucket name recorded in every manifest row
    /// * `dest_root` - Local root; each object lands at `dest_root/<key>`
    /// * `only_metadata` - Skip transfers, still record metadata
    pub fn new(
        transfer: T,
        bucket: impl Into<String>,
        dest_root: impl Into<PathBuf>,
        only_metadata: bool,
    ) -> Self {
        Self {
            transfer,
            bucket: bucket.into(),
            dest_root: dest_root.into(),
            only_metadata,
        }
    }

    /// Process every object in sequence order, notifying `observe` per object.
    ///
    /// Exactly one [`ManifestRecord`] is appended per object, in the order
    /// objects arrive. A transfer failure aborts the whole run; no partial
    /// manifest is returned.
    pub async fn download_with<F>(
        &self,
        objects: impl IntoIterator<Item = S3Object>,
        mut observe: F,
    ) -> Result<DownloadOutcome>
    where
        F: FnMut(&S3Object),
    {
        let mut records = Vec::new();
        let mut stats = FetchStats::new();

        for obj in objects {
            if !self.only_metadata {
                let dest = self.dest_root.join(&obj.key);
                self.transfer.fetch(&obj.key, &dest).await?;
            }

            records.push(ManifestRecord::from_object(&self.bucket, &obj));
            stats.record_object(obj.size, !self.only_metadata);
            observe(&obj);

            debug!(
                key = %obj.key,
                size = obj.size,
                only_metadata = self.only_metadata,
                "Processed object"
            );
        }

        stats.complete();

        Ok(DownloadOutcome { records, stats })
    }

    /// Process every object without a progress observer.
    pub async fn download(
        &self,
        objects: impl IntoIterator<Item = S3Object>,
    ) -> Result<DownloadOutcome> {
        self.download_with(objects, |_| {}).await
    }
}
