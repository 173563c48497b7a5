use crate::error::{Error, LocalFileNotFoundSnafu, Result};
use opendal::Operator;
use snafu::ensure;
use std::path::{Path, PathBuf};
use std::str::FromStr;

pub mod constants;
mod operations;
pub mod outcome;
pub mod path;
pub mod table;
mod utils;

use self::constants::DEFAULT_FS_ROOT;
use self::operations::download::OpenDalDownloader;
use self::operations::list::{OpenDalLister, to_storage_paths};
use self::operations::read::OpenDalTableReader;
use self::operations::upload::OpenDalUploader;
use self::operations::write::OpenDalTableWriter;
use self::operations::{Downloader, Lister, TableReader, TableWriter, Uploader};
use crate::wrap_err;

pub use self::operations::list::filter_csv_keys;
pub use self::outcome::TransferResult;
pub use self::path::StoragePath;
pub use self::table::Table;

/// Storage provider types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageProvider {
    Oss,
    S3,
    Fs,
}

impl FromStr for StorageProvider {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "oss" => Ok(Self::Oss),
            "s3" | "minio" => Ok(Self::S3),
            "fs" => Ok(Self::Fs),
            _ => Err(Error::UnsupportedProvider {
                provider: s.to_string(),
            }),
        }
    }
}

/// Backend settings shared by every bucket the gateway touches.
///
/// The bucket itself is not part of the configuration; it comes from each
/// call's storage URI.
#[derive(Debug, Clone)]
pub struct StorageConfig {
    pub provider: StorageProvider,
    pub access_key_id: Option<String>,
    pub access_key_secret: Option<String>,
    pub endpoint: Option<String>,
    pub region: Option<String>,
    pub root_path: Option<String>,
}

impl StorageConfig {
    pub fn oss(
        access_key_id: Option<String>,
        access_key_secret: Option<String>,
        endpoint: String,
    ) -> Self {
        Self {
            provider: StorageProvider::Oss,
            access_key_id,
            access_key_secret,
            endpoint: Some(endpoint),
            region: None,
            root_path: None,
        }
    }

    pub fn s3(
        access_key_id: Option<String>,
        secret_access_key: Option<String>,
        region: Option<String>,
    ) -> Self {
        Self {
            provider: StorageProvider::S3,
            access_key_id,
            access_key_secret: secret_access_key,
            endpoint: None,
            region,
            root_path: None,
        }
    }

    /// Local directory backend; each bucket is a subdirectory of `root_path`.
    pub fn fs(root_path: impl Into<String>) -> Self {
        Self {
            provider: StorageProvider::Fs,
            access_key_id: None,
            access_key_secret: None,
            endpoint: None,
            region: None,
            root_path: Some(root_path.into()),
        }
    }
}

/// Gateway for moving CSV files between the local filesystem and buckets.
///
/// Every operation is a single round trip. Failures are logged and returned
/// as [`TransferResult::Failure`], never propagated.
#[derive(Debug, Clone)]
pub struct CsvGateway {
    config: StorageConfig,
}

impl CsvGateway {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    /// Build an OpenDAL operator rooted at `bucket`.
    pub fn operator(&self, bucket: &str) -> Result<Operator> {
        let config = &self.config;
        match config.provider {
            StorageProvider::Oss => {
                #[cfg(feature = "oss")]
                {
                    let mut builder = opendal::services::Oss::default().bucket(bucket);
                    if let Some(access_key_id) = &config.access_key_id {
                        builder = builder.access_key_id(access_key_id);
                    }
                    if let Some(access_key_secret) = &config.access_key_secret {
                        builder = builder.access_key_secret(access_key_secret);
                    }
                    if let Some(endpoint) = &config.endpoint {
                        builder = builder.endpoint(endpoint);
                    }
                    Ok(Operator::new(builder)?.finish())
                }

                #[cfg(not(feature = "oss"))]
                {
                    let _ = bucket;
                    Err(Error::UnsupportedProvider {
                        provider: "oss (feature disabled)".to_string(),
                    })
                }
            }
            StorageProvider::S3 => {
                let mut builder = opendal::services::S3::default().bucket(bucket);
                if let Some(access_key_id) = &config.access_key_id {
                    builder = builder.access_key_id(access_key_id);
                }
                if let Some(secret_access_key) = &config.access_key_secret {
                    builder = builder.secret_access_key(secret_access_key);
                }
                if let Some(region) = &config.region {
                    builder = builder.region(region);
                }
                if let Some(endpoint) = &config.endpoint {
                    builder = builder.endpoint(endpoint);
                }
                Ok(Operator::new(builder)?.finish())
            }
            StorageProvider::Fs => {
                let root = Path::new(config.root_path.as_deref().unwrap_or(DEFAULT_FS_ROOT))
                    .join(bucket);
                let builder = opendal::services::Fs::default().root(&root.to_string_lossy());
                Ok(Operator::new(builder)?.finish())
            }
        }
    }

    /// Upload a local file under `destination` (a bucket URI with an
    /// optional key prefix). Returns the written object's path.
    pub async fn upload(
        &self,
        local_path: impl AsRef<Path>,
        destination: &str,
    ) -> TransferResult<StoragePath> {
        let local_path = local_path.as_ref();
        log::debug!(
            "upload provider={:?} local_path={} destination={}",
            self.config.provider,
            local_path.display(),
            destination
        );
        let result = wrap_err!(
            self.try_upload(local_path, destination).await,
            UploadFailed {
                local_path: local_path.display().to_string(),
                remote_path: destination.to_string()
            }
        );
        TransferResult::settle("upload", result)
    }

    async fn try_upload(&self, local_path: &Path, destination: &str) -> Result<StoragePath> {
        // Checked before the destination is parsed or a backend is configured.
        ensure!(
            local_path.exists(),
            LocalFileNotFoundSnafu {
                path: local_path.to_path_buf()
            }
        );

        let prefix = StoragePath::parse(destination)?;
        let uploader = OpenDalUploader::new(self.operator(&prefix.bucket)?);
        log::info!("Uploading {} to {prefix}", local_path.display());
        let key = uploader.upload(local_path, &prefix.key).await?;
        let uploaded = prefix.with_key(key);
        log::info!("Upload successful: {uploaded}");
        Ok(uploaded)
    }

    /// Download the object at `source` into `local_dir`, creating the
    /// directory first. Returns the local file path.
    pub async fn download(
        &self,
        source: &str,
        local_dir: impl AsRef<Path>,
    ) -> TransferResult<PathBuf> {
        let local_dir = local_dir.as_ref();
        log::debug!(
            "download provider={:?} source={} local_dir={}",
            self.config.provider,
            source,
            local_dir.display()
        );
        let result = wrap_err!(
            self.try_download(source, local_dir).await,
            DownloadFailed {
                remote_path: source.to_string(),
                local_path: local_dir.display().to_string()
            }
        );
        TransferResult::settle("download", result)
    }

    async fn try_download(&self, source: &str, local_dir: &Path) -> Result<PathBuf> {
        let path = StoragePath::parse(source)?;
        let downloader = OpenDalDownloader::new(self.operator(&path.bucket)?);
        log::info!("Downloading {path} to {}", local_dir.display());
        let local_file = downloader.download(&path.key, local_dir).await?;
        log::info!("Download successful: {}", local_file.display());
        Ok(local_file)
    }

    /// List CSV objects under `prefix`, reading a single listing page.
    pub async fn list(&self, prefix: &str) -> TransferResult<Vec<StoragePath>> {
        log::debug!("list provider={:?} prefix={}", self.config.provider, prefix);
        let result = wrap_err!(
            self.try_list(prefix).await,
            ListFailed {
                path: prefix.to_string()
            }
        );
        TransferResult::settle("list", result)
    }

    async fn try_list(&self, prefix: &str) -> Result<Vec<StoragePath>> {
        let path = StoragePath::parse(prefix)?;
        let lister = OpenDalLister::new(self.operator(&path.bucket)?);
        log::info!("Listing CSV files in {path}");
        let keys = lister.list_csv(&path.key).await?;
        Ok(to_storage_paths(&path.bucket, keys))
    }

    /// Read the CSV object at `source` into a table.
    pub async fn read_table(&self, source: &str) -> TransferResult<Table> {
        log::debug!(
            "read_table provider={:?} source={}",
            self.config.provider,
            source
        );
        let result = wrap_err!(
            self.try_read_table(source).await,
            ReadTableFailed {
                path: source.to_string()
            }
        );
        TransferResult::settle("read_table", result)
    }

    async fn try_read_table(&self, source: &str) -> Result<Table> {
        let path = StoragePath::parse(source)?;
        let reader = OpenDalTableReader::new(self.operator(&path.bucket)?);
        log::info!("Reading CSV from {path}");
        let table = reader.read_table(&path.key).await?;
        log::info!("Successfully read CSV with {} rows", table.row_count());
        Ok(table)
    }

    /// Store `table` as CSV at exactly the key named by `destination`.
    pub async fn write_table(
        &self,
        table: &Table,
        destination: &str,
    ) -> TransferResult<StoragePath> {
        log::debug!(
            "write_table provider={:?} destination={} rows={}",
            self.config.provider,
            destination,
            table.row_count()
        );
        let result = wrap_err!(
            self.try_write_table(table, destination).await,
            WriteTableFailed {
                path: destination.to_string()
            }
        );
        TransferResult::settle("write_table", result)
    }

    async fn try_write_table(&self, table: &Table, destination: &str) -> Result<StoragePath> {
        let path = StoragePath::parse(destination)?;
        let writer = OpenDalTableWriter::new(self.operator(&path.bucket)?);
        log::info!("Writing table with {} rows to {path}", table.row_count());
        writer.write_table(table, &path.key).await?;
        log::info!("Successfully wrote table to {path}");
        Ok(path)
    }
}
