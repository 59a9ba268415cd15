//! Object transfer seam.

use std::path::Path;

use async_trait::async_trait;
use aws_sdk_s3::Client;
use msc_error::{FetchError, Result};
use tracing::debug;

/// Trait for transferring one remote object to a local path.
///
/// Implementations handle the actual byte movement. The downloader is
/// generic over this trait so its metadata accounting can be exercised with
/// a recording implementation, and so only-metadata runs can be verified to
/// perform zero transfers.
#[async_trait]
pub trait Transfer: Send + Sync {
    /// Fetch the object at `key` and write it to `dest`, creating parent
    /// directories as needed.
    async fn fetch(&self, key: &str, dest: &Path) -> Result<()>;
}

/// S3-backed transfer implementation.
pub struct S3Transfer {
    client: Client,
    bucket: String,
}

impl S3Transfer {
    /// Create a new S3Transfer for the given bucket.
    pub fn new(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl Transfer for S3Transfer {
    async fn fetch(&self, key: &str, dest: &Path) -> Result<()> {
        if let Some(parent) = dest.parent() {
            tokio::fs::create_dir_all(parent)
                .await
                .map_err(|e| FetchError::Io(format!("creating {}: {}", parent.display(), e)))?;
        }

        debug!(bucket = %self.bucket, key = %key, dest = %dest.display(), "Fetching object");

        let resp = self
            .client
            .get_object()
            .bucket(&self.bucket)
            .key(key)
            .send()
            .await
            .map_err(|e| FetchError::Transfer {
                key: key.to_string(),
                reason: format!("{}", aws_sdk_s3::error::DisplayErrorContext(&e)),
            })?;

        let bytes = resp.body.collect().await.map_err(|e| FetchError::Transfer {
            key: key.to_string(),
            reason: format!("reading body: {e}"),
        })?;

        tokio::fs::write(dest, bytes.into_bytes())
            .await
            .map_err(|e| FetchError::Io(format!("writing {}: {}", dest.display(), e)))?;

        Ok(())
    }
}
