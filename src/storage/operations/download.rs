use crate::error::{InvalidPathSnafu, Result};
use crate::storage::utils::path::key_basename;
use opendal::Operator;
use snafu::OptionExt;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Trait for downloading objects from storage.
pub trait Downloader {
    /// Download a single object into a local directory.
    ///
    /// # Arguments
    /// * `key` - Object key in storage
    /// * `local_dir` - Destination directory, created when missing
    ///
    /// # Returns
    /// * `Result<PathBuf>` - Path of the written local file
    async fn download(&self, key: &str, local_dir: &Path) -> Result<PathBuf>;
}

/// Implementation of Downloader for OpenDAL Operator.
pub struct OpenDalDownloader {
    operator: Operator,
}

impl OpenDalDownloader {
    /// Create a new downloader with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Downloader for OpenDalDownloader {
    async fn download(&self, key: &str, local_dir: &Path) -> Result<PathBuf> {
        // The directory stays behind even if the transfer below fails.
        fs::create_dir_all(local_dir).await?;

        let file_name = key_basename(key).context(InvalidPathSnafu {
            uri: key,
            reason: "key does not name an object",
        })?;
        let local_file_path = local_dir.join(file_name);

        let data = self.operator.read(key).await?;
        fs::write(&local_file_path, data.to_vec()).await?;

        Ok(local_file_path)
    }
}
