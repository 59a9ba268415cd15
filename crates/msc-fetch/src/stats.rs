//! Statistics for fetch runs.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Statistics collected during a fetch run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct FetchStats {
    /// When the fetch started
    pub started_at: Option<DateTime<Utc>>,

    /// When the fetch completed
    pub completed_at: Option<DateTime<Utc>>,

    /// Total number of objects in the bucket listing
    pub objects_listed: usize,

    /// Number of objects under the selected folder
    pub objects_matched: usize,

    /// Number of objects actually transferred (zero in only-metadata runs)
    pub objects_transferred: usize,

    /// Total bytes transferred
    pub bytes_transferred: u64,
}

impl FetchStats {
    /// Create a new stats tracker with the current time as start time.
    pub fn new() -> Self {
        Self {
            started_at: Some(Utc::now()),
            ..Default::default()
        }
    }

    /// Mark the fetch as complete with the current time.
    pub fn complete(&mut self) {
        self.completed_at = Some(Utc::now());
    }

    /// Record one processed object.
    pub fn record_object(&mut self, size_bytes: u64, transferred: bool) {
        self.objects_matched += 1;
        if transferred {
            self.objects_transferred += 1;
            self.bytes_transferred += size_bytes;
        }
    }

    /// Get the duration of the fetch run.
    pub fn duration(&self) -> Option<Duration> {
        match (self.started_at, self.completed_at) {
            (Some(start), Some(end)) => Some(end - start),
            _ => None,
        }
    }

    /// Calculate the throughput in objects per second.
    pub fn objects_per_second(&self) -> Option<f64> {
        self.duration().map(|d| {
            let secs = d.num_milliseconds() as f64 / 1000.0;
            if secs > 0.0 {
                self.objects_matched as f64 / secs
            } else {
                0.0
            }
        })
    }
}
