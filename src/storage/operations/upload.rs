use crate::error::{InvalidPathSnafu, Result};
use crate::storage::utils::path::{build_remote_key, local_basename};
use opendal::Operator;
use snafu::OptionExt;
use std::path::Path;
use tokio::fs;

/// Trait for uploading local files to storage.
pub trait Uploader {
    /// Upload a single local file under a key prefix. The caller has
    /// already checked that `local_path` exists.
    ///
    /// # Arguments
    /// * `local_path` - Source file on the local filesystem
    /// * `key_prefix` - Destination prefix; the file's base name is appended
    ///
    /// # Returns
    /// * `Result<String>` - The object key that was written
    async fn upload(&self, local_path: &Path, key_prefix: &str) -> Result<String>;
}

/// Implementation of Uploader for OpenDAL Operator.
pub struct OpenDalUploader {
    operator: Operator,
}

impl OpenDalUploader {
    /// Create a new uploader with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Uploader for OpenDalUploader {
    async fn upload(&self, local_path: &Path, key_prefix: &str) -> Result<String> {
        let file_name = local_basename(local_path).context(InvalidPathSnafu {
            uri: local_path.display().to_string(),
            reason: "local path has no file name",
        })?;
        let key = build_remote_key(key_prefix, &file_name);

        // Whole-object put; objects here are small CSV files.
        let content = fs::read(local_path).await?;
        let size = content.len();
        self.operator.write(&key, content).await?;

        log::debug!("uploaded {} bytes to key {key}", size);
        Ok(key)
    }
}
