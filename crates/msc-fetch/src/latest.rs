//! Latest-folder selection over a bucket catalog.

use msc_error::{FetchError, Result};

use crate::s3::S3Object;

/// Select the latest top-level folder from a materialized catalog.
///
/// Every object belongs to the group named by its leading path segment; the
/// lexicographically greatest group name is treated as the latest collection
/// run, and is returned with a trailing `/` so it can be used directly as a
/// key prefix.
///
/// Folder names in the corpus bucket embed an ISO date prefix, which is what
/// makes lexicographic order a recency proxy. Names outside that convention
/// would still sort, just not chronologically.
///
/// # Errors
///
/// Returns [`FetchError::EmptyBucket`] when the catalog holds no objects.
pub fn latest_group(bucket: &str, objects: &[S3Object]) -> Result<String> {
    let latest = objects
        .iter()
        .map(|obj| obj.group())
        .filter(|group| !group.is_empty())
        .max();

    match latest {
        Some(group) => Ok(format!("{group}/")),
        None => Err(FetchError::EmptyBucket(bucket.to_string()).into()),
    }
}
