use std::env;
use std::str::FromStr;

use crate::error::Result;
use crate::storage::constants::{
    DEFAULT_FS_ROOT, DEFAULT_MINIO_ENDPOINT, DEFAULT_MINIO_REGION, DEFAULT_OSS_ENDPOINT,
};
use crate::storage::{StorageConfig, StorageProvider};

// Read the first variable that is set, in order.
fn first_env_var(keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| env::var(key).ok())
}

/// Load storage configuration from environment variables.
///
/// Credentials are optional; when absent the storage SDK falls back to its
/// own ambient resolution.
pub fn load_storage_config() -> Result<StorageConfig> {
    let provider_str = env::var("STORAGE_PROVIDER").unwrap_or_else(|_| "s3".to_string());
    let provider = StorageProvider::from_str(&provider_str)?;

    let config = match provider {
        StorageProvider::Oss => load_oss_config(),
        StorageProvider::S3 => load_s3_config(&provider_str),
        StorageProvider::Fs => load_fs_config(),
    };
    log::debug!("loaded storage config provider={:?}", config.provider);
    Ok(config)
}

/// Load OSS (Alibaba Cloud) configuration
fn load_oss_config() -> StorageConfig {
    let access_key_id = first_env_var(&["STORAGE_ACCESS_KEY_ID", "OSS_ACCESS_KEY_ID"]);
    let access_key_secret =
        first_env_var(&["STORAGE_ACCESS_KEY_SECRET", "OSS_ACCESS_KEY_SECRET"]);
    let endpoint = first_env_var(&["STORAGE_ENDPOINT", "OSS_ENDPOINT"])
        .unwrap_or_else(|| DEFAULT_OSS_ENDPOINT.to_string());

    StorageConfig::oss(access_key_id, access_key_secret, endpoint)
}

/// Load S3 (AWS) or MinIO configuration
fn load_s3_config(provider_str: &str) -> StorageConfig {
    let is_minio = provider_str.eq_ignore_ascii_case("minio");

    let access_key_id = if is_minio {
        first_env_var(&["STORAGE_ACCESS_KEY_ID", "MINIO_ACCESS_KEY"])
    } else {
        first_env_var(&["STORAGE_ACCESS_KEY_ID", "AWS_ACCESS_KEY_ID"])
    };

    let secret_access_key = if is_minio {
        first_env_var(&["STORAGE_ACCESS_KEY_SECRET", "MINIO_SECRET_KEY"])
    } else {
        first_env_var(&["STORAGE_ACCESS_KEY_SECRET", "AWS_SECRET_ACCESS_KEY"])
    };

    let mut region = first_env_var(&["STORAGE_REGION", "AWS_REGION", "AWS_DEFAULT_REGION"]);
    if is_minio && region.is_none() {
        region = Some(DEFAULT_MINIO_REGION.to_string());
    }

    let endpoint = if is_minio {
        Some(
            first_env_var(&["STORAGE_ENDPOINT", "MINIO_ENDPOINT"])
                .unwrap_or_else(|| DEFAULT_MINIO_ENDPOINT.to_string()),
        )
    } else {
        env::var("STORAGE_ENDPOINT").ok()
    };

    let mut config = StorageConfig::s3(access_key_id, secret_access_key, region);
    config.endpoint = endpoint;
    config
}

/// Load filesystem configuration (for testing)
fn load_fs_config() -> StorageConfig {
    let root_path = env::var("STORAGE_ROOT_PATH").unwrap_or_else(|_| DEFAULT_FS_ROOT.to_string());
    StorageConfig::fs(root_path)
}
