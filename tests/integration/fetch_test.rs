//! Fetch integration tests using LocalStack.
//!
//! These verify the full path: list the bucket, pick the latest folder,
//! download its objects, and write the metadata manifest.

use crate::common::LocalStackTestContext;
use msc_error::{FetchError, MscError};
use msc_fetch::{
    CredentialSource, FetchRequest, ManifestRecord, S3Config, create_s3_client, fetch_latest,
};

async fn test_client(ctx: &LocalStackTestContext) -> aws_sdk_s3::Client {
    // LocalStack accepts any explicit pair; keeps the test hermetic
    let credentials =
        CredentialSource::from_pair(Some("test".to_string()), Some("test".to_string())).unwrap();

    let config = S3Config::new("unused")
        .with_region(&ctx.region)
        .with_endpoint(&ctx.endpoint)
        .with_credentials(credentials);

    create_s3_client(&config).await.unwrap()
}

fn read_manifest(path: &std::path::Path) -> Vec<ManifestRecord> {
    let mut reader = csv::Reader::from_path(path).unwrap();
    reader
        .deserialize()
        .collect::<Result<_, _>>()
        .unwrap()
}

async fn seed_corpus_bucket(ctx: &LocalStackTestContext, bucket: &str) {
    ctx.create_bucket(bucket).await.unwrap();
    ctx.upload_text(bucket, "2020-01-01/old.txt", "stale statement")
        .await
        .unwrap();
    ctx.upload_text(bucket, "2020-02-01/a.txt", "hello   world\nfoo")
        .await
        .unwrap();
    ctx.upload_text(bucket, "2020-02-01/b.txt", "second statement")
        .await
        .unwrap();
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_fetch_latest_downloads_only_latest_folder() {
    let ctx = LocalStackTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "msc-test-fetch-latest";
    seed_corpus_bucket(&ctx, bucket).await;

    let dest = tempfile::tempdir().unwrap();
    let manifest_path = dest.path().join("metadatas.csv");

    let client = test_client(&ctx).await;
    let request = FetchRequest::new(bucket)
        .with_dest_root(dest.path())
        .with_manifest_path(&manifest_path);

    let report = fetch_latest(&client, &request, |_| {}).await.unwrap();

    assert_eq!(report.prefix, "2020-02-01/");
    assert_eq!(report.records_written, 2);
    assert_eq!(report.stats.objects_listed, 3);
    assert_eq!(report.stats.objects_transferred, 2);

    // Local files mirror the remote keys
    let a = std::fs::read_to_string(dest.path().join("2020-02-01/a.txt")).unwrap();
    assert_eq!(a, "hello   world\nfoo");
    assert!(dest.path().join("2020-02-01/b.txt").is_file());
    assert!(!dest.path().join("2020-01-01").exists());

    // Manifest holds exactly the latest folder's objects
    let records = read_manifest(&manifest_path);
    let filenames: Vec<&str> = records.iter().map(|r| r.filename.as_str()).collect();
    assert_eq!(filenames, vec!["2020-02-01/a.txt", "2020-02-01/b.txt"]);
    assert!(records.iter().all(|r| r.bucket_name == bucket));
    assert_eq!(records[0].size, "17");
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_only_metadata_matches_full_run_with_zero_transfers() {
    let ctx = LocalStackTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "msc-test-only-metadata";
    seed_corpus_bucket(&ctx, bucket).await;

    let client = test_client(&ctx).await;

    let full_dest = tempfile::tempdir().unwrap();
    let full_manifest = full_dest.path().join("metadatas.csv");
    let full_request = FetchRequest::new(bucket)
        .with_dest_root(full_dest.path())
        .with_manifest_path(&full_manifest);
    fetch_latest(&client, &full_request, |_| {}).await.unwrap();

    let meta_dest = tempfile::tempdir().unwrap();
    let meta_manifest = meta_dest.path().join("metadatas.csv");
    let meta_request = FetchRequest::new(bucket)
        .with_dest_root(meta_dest.path())
        .with_manifest_path(&meta_manifest)
        .with_only_metadata(true);
    let meta_report = fetch_latest(&client, &meta_request, |_| {}).await.unwrap();

    assert_eq!(meta_report.stats.objects_transferred, 0);
    assert_eq!(read_manifest(&meta_manifest), read_manifest(&full_manifest));

    // The selected folder directory is created, but stays empty
    let folder = meta_dest.path().join("2020-02-01");
    assert!(folder.is_dir());
    assert_eq!(std::fs::read_dir(&folder).unwrap().count(), 0);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_fetch_is_idempotent_over_stable_bucket() {
    let ctx = LocalStackTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "msc-test-idempotent";
    seed_corpus_bucket(&ctx, bucket).await;

    let client = test_client(&ctx).await;
    let dest = tempfile::tempdir().unwrap();
    let manifest_path = dest.path().join("metadatas.csv");
    let request = FetchRequest::new(bucket)
        .with_dest_root(dest.path())
        .with_manifest_path(&manifest_path)
        .with_only_metadata(true);

    fetch_latest(&client, &request, |_| {}).await.unwrap();
    let first = read_manifest(&manifest_path);

    fetch_latest(&client, &request, |_| {}).await.unwrap();
    let second = read_manifest(&manifest_path);

    assert_eq!(first, second);
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_empty_bucket_fails_with_typed_error() {
    let ctx = LocalStackTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let bucket = "msc-test-empty-bucket";
    ctx.create_bucket(bucket).await.unwrap();

    let client = test_client(&ctx).await;
    let dest = tempfile::tempdir().unwrap();
    let request = FetchRequest::new(bucket)
        .with_dest_root(dest.path())
        .with_manifest_path(dest.path().join("metadatas.csv"));

    let result = fetch_latest(&client, &request, |_| {}).await;

    assert!(matches!(
        result,
        Err(MscError::Fetch(FetchError::EmptyBucket(name))) if name == bucket
    ));
}

#[tokio::test]
#[ignore = "requires LocalStack"]
async fn test_missing_bucket_fails_with_not_found() {
    let ctx = LocalStackTestContext::new().await;
    if !ctx.is_available().await {
        eprintln!("LocalStack not available, skipping test");
        return;
    }

    let client = test_client(&ctx).await;
    let dest = tempfile::tempdir().unwrap();
    let request = FetchRequest::new("msc-test-does-not-exist")
        .with_dest_root(dest.path())
        .with_manifest_path(dest.path().join("metadatas.csv"));

    let result = fetch_latest(&client, &request, |_| {}).await;

    assert!(matches!(
        result,
        Err(MscError::Fetch(FetchError::BucketNotFound(_)))
    ));
}
