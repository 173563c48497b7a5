use crate::error::Result;
use crate::storage::constants::LIST_PAGE_LIMIT;
use crate::storage::path::StoragePath;
use crate::storage::utils::path::has_csv_extension;
use futures::stream::{StreamExt, TryStreamExt};
use opendal::Operator;

/// Trait for listing CSV objects in storage.
pub trait Lister {
    /// List CSV object keys under a prefix.
    ///
    /// Only one listing page is read, so results for very large prefixes
    /// may be incomplete.
    ///
    /// # Arguments
    /// * `prefix` - Key prefix to scope the listing to
    ///
    /// # Returns
    /// * `Result<Vec<String>>` - Matching keys in backend order
    async fn list_csv(&self, prefix: &str) -> Result<Vec<String>>;
}

/// Implementation of Lister for OpenDAL Operator.
pub struct OpenDalLister {
    operator: Operator,
}

impl OpenDalLister {
    /// Create a new lister with the given OpenDAL operator.
    pub fn new(operator: Operator) -> Self {
        Self { operator }
    }
}

impl Lister for OpenDalLister {
    async fn list_csv(&self, prefix: &str) -> Result<Vec<String>> {
        let lister = self
            .operator
            .lister_with(prefix)
            .recursive(true)
            .await?;

        // Only the first page worth of entries; no further pagination.
        let entries: Vec<opendal::Entry> = lister.take(LIST_PAGE_LIMIT).try_collect().await?;
        log::debug!("listing of '{prefix}' returned {} entries", entries.len());

        let keys = entries
            .into_iter()
            .filter(|entry| !entry.metadata().mode().is_dir())
            .map(|entry| entry.path().to_string());
        Ok(filter_csv_keys(keys))
    }
}

/// Keep keys ending in `.csv` (any case), preserving their order.
pub fn filter_csv_keys<I>(keys: I) -> Vec<String>
where
    I: IntoIterator,
    I::Item: Into<String>,
{
    keys.into_iter()
        .map(Into::into)
        .filter(|key| has_csv_extension(key))
        .collect()
}

/// Render listed keys as storage paths in the given bucket.
pub fn to_storage_paths(bucket: &str, keys: Vec<String>) -> Vec<StoragePath> {
    keys.into_iter()
        .map(|key| StoragePath::new(bucket, key))
        .collect()
}
