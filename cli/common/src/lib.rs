//! Shared utilities for the ms-corpus CLI binaries.
//!
//! This crate provides common functionality shared between the `msc-fetch`
//! and `msc-transform` CLI applications.

pub mod args;
pub mod format;
pub mod logging;

pub use args::LogLevel;
pub use format::{format_bytes, format_number};
pub use logging::init_logging;
