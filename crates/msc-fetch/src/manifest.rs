//! Per-object metadata records and the CSV manifest.

use std::path::Path;

use msc_error::{FetchError, Result};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::s3::S3Object;

/// One manifest row describing a processed object.
///
/// An explicit record type with named fields: every attribute is coerced to
/// its string form at construction, and a missing attribute becomes an empty
/// string there and only there. Field order fixes the manifest column order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManifestRecord {
    pub bucket_name: String,
    pub filename: String,
    pub size: String,
    pub last_modified: String,
    pub owner_name: String,
    pub owner_id: String,
    pub storage_class: String,
}

impl ManifestRecord {
    /// Build a record from one listed object.
    pub fn from_object(bucket: &str, obj: &S3Object) -> Self {
        Self {
            bucket_name: bucket.to_string(),
            filename: obj.key.clone(),
            size: obj.size.to_string(),
            last_modified: obj
                .last_modified
                .map(|t| t.to_rfc3339())
                .unwrap_or_default(),
            owner_name: obj.owner_display_name.clone().unwrap_or_default(),
            owner_id: obj.owner_id.clone().unwrap_or_default(),
            storage_class: obj.storage_class.clone().unwrap_or_default(),
        }
    }
}

/// Write the full ordered record sequence as a CSV manifest.
///
/// The header row comes from the record field names. Any existing file at
/// `path` is overwritten.
pub fn write_manifest(path: &Path, records: &[ManifestRecord]) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)
        .map_err(|e| FetchError::Manifest(format!("opening {}: {}", path.display(), e)))?;

    for record in records {
        writer
            .serialize(record)
            .map_err(|e| FetchError::Manifest(format!("writing record: {e}")))?;
    }

    writer
        .flush()
        .map_err(|e| FetchError::Manifest(format!("flushing {}: {}", path.display(), e)))?;

    info!(path = %path.display(), records = records.len(), "Wrote manifest");

    Ok(())
}
