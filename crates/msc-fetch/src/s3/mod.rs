//! S3 client and listing functionality.
//!
//! This module provides the S3 operations needed to fetch the corpus:
//! - Client configuration with LocalStack support
//! - Paginated object listing with streaming

mod client;
mod list;

pub use client::{S3Config, create_s3_client};
pub use list::{S3Object, classify_list_error, list_objects};
