//! Progress reporting for msc-fetch.

use std::io::{self, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicU64, AtomicUsize, Ordering};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;

use msc_cli_common::format_bytes;

/// Progress reporter for fetch runs.
///
/// Counters are bumped from the download loop; a background task prints
/// them to stderr at a fixed interval. Purely observational: the fetch
/// outcome does not depend on it.
pub struct ProgressReporter {
    /// Whether progress reporting is enabled
    enabled: bool,
    /// Reporting interval
    interval: Duration,
    /// Shared state for progress tracking
    state: Arc<ProgressState>,
    /// Handle to the background reporter task
    handle: Option<JoinHandle<()>>,
}

/// Shared state for progress tracking.
struct ProgressState {
    /// Number of objects processed
    objects_processed: AtomicUsize,
    /// Total bytes of processed objects
    bytes_processed: AtomicU64,
    /// Whether to stop reporting
    stop: AtomicBool,
    /// Start time
    start_time: Instant,
}

impl ProgressReporter {
    /// Create a new progress reporter.
    pub fn new(enabled: bool, interval_secs: u64) -> Self {
        Self {
            enabled,
            interval: Duration::from_secs(interval_secs),
            state: Arc::new(ProgressState {
                objects_processed: AtomicUsize::new(0),
                bytes_processed: AtomicU64::new(0),
                stop: AtomicBool::new(false),
                start_time: Instant::now(),
            }),
            handle: None,
        }
    }

    /// Start the background progress reporter.
    pub fn start(&mut self) {
        if !self.enabled {
            return;
        }

        let state = Arc::clone(&self.state);
        let interval = self.interval;

        let handle = tokio::spawn(async move {
            let mut interval_timer = tokio::time::interval(interval);
            interval_timer.tick().await; // Skip first immediate tick

            loop {
                interval_timer.tick().await;

                if state.stop.load(Ordering::Relaxed) {
                    break;
                }

                let objects = state.objects_processed.load(Ordering::Relaxed);
                let bytes = state.bytes_processed.load(Ordering::Relaxed);
                let elapsed = state.start_time.elapsed();

                let _ = writeln!(
                    io::stderr(),
                    "[Progress] {} objects processed, {} ({:.1}s elapsed)",
                    objects,
                    format_bytes(bytes),
                    elapsed.as_secs_f64()
                );
            }
        });

        self.handle = Some(handle);
    }

    /// Record one processed object.
    pub fn record_object(&self, size_bytes: u64) {
        if self.enabled {
            self.state.objects_processed.fetch_add(1, Ordering::Relaxed);
            self.state
                .bytes_processed
                .fetch_add(size_bytes, Ordering::Relaxed);
        }
    }

    /// Stop the progress reporter and print final counts.
    pub async fn stop(mut self) {
        if !self.enabled {
            return;
        }

        self.state.stop.store(true, Ordering::Relaxed);

        if let Some(handle) = self.handle.take() {
            handle.abort();
            let _ = handle.await;
        }

        let objects = self.state.objects_processed.load(Ordering::Relaxed);
        let bytes = self.state.bytes_processed.load(Ordering::Relaxed);
        let elapsed = self.state.start_time.elapsed();

        let _ = writeln!(
            io::stderr(),
            "[Progress] Complete: {} objects processed, {} ({:.1}s)",
            objects,
            format_bytes(bytes),
            elapsed.as_secs_f64()
        );
    }
}
