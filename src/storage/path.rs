use crate::error::{Error, InvalidPathSnafu, Result};
use crate::storage::constants::STORAGE_SCHEME;
use snafu::ensure;
use std::fmt;
use std::str::FromStr;

/// Bucket and key parsed from an `s3://bucket[/key]` URI.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StoragePath {
    pub bucket: String,
    pub key: String,
}

impl StoragePath {
    pub fn new(bucket: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            bucket: bucket.into(),
            key: key.into(),
        }
    }

    /// Parse a storage URI. The key is everything after the first `/`
    /// following the bucket, and is empty when absent.
    pub fn parse(uri: &str) -> Result<Self> {
        let rest = uri.strip_prefix(STORAGE_SCHEME).ok_or_else(|| {
            InvalidPathSnafu {
                uri,
                reason: format!("path must start with '{STORAGE_SCHEME}'"),
            }
            .build()
        })?;

        let (bucket, key) = rest.split_once('/').unwrap_or((rest, ""));
        ensure!(
            !bucket.is_empty(),
            InvalidPathSnafu {
                uri,
                reason: "bucket name is empty",
            }
        );

        Ok(Self::new(bucket, key))
    }

    /// The same bucket with a different key.
    pub fn with_key(&self, key: impl Into<String>) -> Self {
        Self::new(self.bucket.clone(), key)
    }
}

impl FromStr for StoragePath {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for StoragePath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.key.is_empty() {
            write!(f, "{STORAGE_SCHEME}{}", self.bucket)
        } else {
            write!(f, "{STORAGE_SCHEME}{}/{}", self.bucket, self.key)
        }
    }
}
