//! Credential resolution for S3 access.

use msc_error::{MscError, Result};

/// Where the S3 credentials come from.
///
/// Resolved once at process start and passed by value from then on; there is
/// no global credential state. An explicit pair is frozen for the whole run
/// so a rotated ambient session can never mix an old key id with a new
/// secret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum CredentialSource {
    /// An explicit, matched access key pair supplied by the caller.
    Explicit {
        access_key_id: String,
        secret_access_key: String,
    },

    /// The ambient AWS credential chain (environment, profile, instance
    /// metadata), left to the SDK's default provider.
    #[default]
    Ambient,
}

impl CredentialSource {
    /// Resolve a credential source from an optional key pair.
    ///
    /// Both halves present yields [`CredentialSource::Explicit`]; both absent
    /// falls back to [`CredentialSource::Ambient`]. Supplying only one half
    /// is a configuration error rather than a silent fallback.
    pub fn from_pair(
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
    ) -> Result<Self> {
        match (access_key_id, secret_access_key) {
            (Some(access_key_id), Some(secret_access_key)) => Ok(Self::Explicit {
                access_key_id,
                secret_access_key,
            }),
            (None, None) => Ok(Self::Ambient),
            _ => Err(MscError::Config(
                "access key and secret key must be supplied together".to_string(),
            )),
        }
    }

    /// Check whether an explicit pair was supplied.
    pub fn is_explicit(&self) -> bool {
        matches!(self, Self::Explicit { .. })
    }
}
