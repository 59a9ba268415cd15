//! Main execution logic for the msc-fetch CLI.

use msc_error::Result;
use msc_fetch::{CredentialSource, FetchReport, FetchRequest, S3Config, create_s3_client, fetch_latest};

use crate::args::Cli;
use crate::progress::ProgressReporter;

/// Execute the fetch with the provided arguments.
pub async fn execute(args: Cli) -> Result<FetchReport> {
    // Credentials are resolved exactly once; the pair is frozen for the run
    let credentials = CredentialSource::from_pair(args.access_key, args.secret_key)?;

    let mut s3_config = S3Config::new(&args.bucket)
        .with_region(&args.region)
        .with_credentials(credentials);

    if let Some(endpoint) = &args.s3_endpoint {
        s3_config = s3_config.with_endpoint(endpoint);
    }

    let client = create_s3_client(&s3_config).await?;

    let request = FetchRequest::new(&args.bucket)
        .with_dest_root(&args.dest)
        .with_manifest_path(&args.metadata_output)
        .with_only_metadata(args.only_metadata);

    let mut progress = ProgressReporter::new(!args.no_progress, args.progress_interval);
    progress.start();

    let result = fetch_latest(&client, &request, |obj| progress.record_object(obj.size)).await;

    progress.stop().await;

    result
}
