//! S3 object listing with pagination support.

use async_stream::try_stream;
use aws_sdk_s3::Client;
use chrono::{DateTime, Utc};
use futures::Stream;
use msc_error::{FetchError, MscError, Result};

/// Represents an S3 object discovered during listing.
///
/// Carries every attribute the metadata manifest records. Owner fields are
/// only populated when the listing requests them, which [`list_objects`]
/// always does.
#[derive(Debug, Clone)]
pub struct S3Object {
    /// The object key (full path within the bucket)
    pub key: String,

    /// Size of the object in bytes
    pub size: u64,

    /// Last modified timestamp
    pub last_modified: Option<DateTime<Utc>>,

    /// Owner display name
    pub owner_display_name: Option<String>,

    /// Owner canonical id
    pub owner_id: Option<String>,

    /// Storage class (e.g. STANDARD)
    pub storage_class: Option<String>,
}

impl S3Object {
    /// The object's group: the key text before the first `/`.
    ///
    /// A key with no separator is its own group.
    pub fn group(&self) -> &str {
        self.key.split('/').next().unwrap_or(self.key.as_str())
    }
}

/// List objects in an S3 bucket with optional prefix filtering.
///
/// Returns a stream of [`S3Object`] items, handling pagination automatically.
/// Owner attributes are requested with `fetch_owner`. Directory markers
/// (zero-content keys ending with `/`) are filtered out.
///
/// # Arguments
///
/// * `client` - The S3 client to use
/// * `bucket` - The bucket name to list
/// * `prefix` - Optional prefix to filter objects
///
/// # Example
///
/// ```ignore
/// use futures::{StreamExt, pin_mut};
///
/// let stream = list_objects(&client, "my-bucket", Some("2020-02-01/"));
/// pin_mut!(stream);
///
/// while let Some(result) = stream.next().await {
///     let obj = result?;
///     println!("Found: {} ({} bytes)", obj.key, obj.size);
/// }
/// ```
pub fn list_objects<'a>(
    client: &'a Client,
    bucket: &str,
    prefix: Option<&str>,
) -> impl Stream<Item = Result<S3Object>> + 'a {
    let bucket = bucket.to_string();
    let prefix = prefix.map(|s| s.to_string());

    try_stream! {
        let mut continuation_token: Option<String> = None;

        loop {
            let mut req = client
                .list_objects_v2()
                .bucket(&bucket)
                .fetch_owner(true);

            if let Some(ref prefix) = prefix {
                req = req.prefix(prefix);
            }

            if let Some(ref token) = continuation_token {
                req = req.continuation_token(token);
            }

            let resp = req.send().await.map_err(|e| {
                let detail = format!("{}", aws_sdk_s3::error::DisplayErrorContext(&e));
                classify_list_error(&bucket, &detail)
            })?;

            if let Some(contents) = resp.contents {
                for obj in contents {
                    let key = obj.key.unwrap_or_default();

                    // Skip directory markers
                    if key.ends_with('/') {
                        continue;
                    }

                    // Skip empty keys
                    if key.is_empty() {
                        continue;
                    }

                    let last_modified = obj.last_modified.and_then(|t| {
                        DateTime::from_timestamp(t.secs(), t.subsec_nanos())
                    });

                    let (owner_display_name, owner_id) = match obj.owner {
                        Some(owner) => (owner.display_name, owner.id),
                        None => (None, None),
                    };

                    yield S3Object {
                        key,
                        size: obj.size.unwrap_or(0) as u64,
                        last_modified,
                        owner_display_name,
                        owner_id,
                        storage_class: obj.storage_class.map(|c| c.as_str().to_string()),
                    };
                }
            }

            // Check if there are more results
            if resp.is_truncated == Some(true) {
                continuation_token = resp.next_continuation_token;
                if continuation_token.is_none() {
                    // No more pages
                    break;
                }
            } else {
                break;
            }
        }
    }
}

/// Classify a listing failure into a typed [`FetchError`].
///
/// Classification is based on the error detail string: a missing bucket maps
/// to [`FetchError::BucketNotFound`], credential and signature failures map
/// to [`FetchError::Authentication`], everything else stays a generic
/// [`FetchError::Listing`].
pub fn classify_list_error(bucket: &str, detail: &str) -> MscError {
    let lower = detail.to_lowercase();

    let error = if lower.contains("nosuchbucket") {
        FetchError::BucketNotFound(bucket.to_string())
    } else if lower.contains("invalidaccesskeyid")
        || lower.contains("signaturedoesnotmatch")
        || lower.contains("accessdenied")
        || lower.contains("credentials")
    {
        FetchError::Authentication(detail.to_string())
    } else {
        FetchError::Listing(detail.to_string())
    };

    error.into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_object(key: &str) -> S3Object {
        S3Object {
            key: key.to_string(),
            size: 1024,
            last_modified: Some(Utc::now()),
            owner_display_name: Some("corpus-owner".to_string()),
            owner_id: Some("abc123".to_string()),
            storage_class: Some("STANDARD".to_string()),
        }
    }

    #[test]
    fn test_s3_object_group() {
        assert_eq!(test_object("2020-02-01/statement.txt").group(), "2020-02-01");
        assert_eq!(test_object("2020-02-01/nested/deep.txt").group(), "2020-02-01");
    }

    #[test]
    fn test_s3_object_group_without_separator() {
        assert_eq!(test_object("loose-file.txt").group(), "loose-file.txt");
    }

    #[test]
    fn test_classify_no_such_bucket() {
        let error = classify_list_error("my-bucket", "service error: NoSuchBucket");
        assert!(matches!(
            error,
            MscError::Fetch(FetchError::BucketNotFound(_))
        ));
    }

    #[test]
    fn test_classify_authentication() {
        for detail in [
            "InvalidAccessKeyId: the key does not exist",
            "SignatureDoesNotMatch",
            "AccessDenied",
            "failed to load credentials",
        ] {
            let error = classify_list_error("my-bucket", detail);
            assert!(
                matches!(error, MscError::Fetch(FetchError::Authentication(_))),
                "expected Authentication for {detail}"
            );
        }
    }

    #[test]
    fn test_classify_other() {
        let error = classify_list_error("my-bucket", "connection timed out");
        assert!(matches!(error, MscError::Fetch(FetchError::Listing(_))));
    }
}
